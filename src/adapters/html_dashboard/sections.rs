//! HTML fragment rendering for the non-chart dashboard sections.

use crate::domain::results::{
    BadgeVariant, BenchmarkRow, InfoSection, Insight, Metric, ModelResult, StatCard, StatTone,
    Tooltip, find_tooltip,
};

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Format rupees with Indian digit grouping: the last three digits form one
/// group, every group above that has two digits. `4112426.0` becomes
/// `₹41,12,426`.
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let rupees = value.abs().round() as u64;
    let digits = rupees.to_string();

    let mut grouped = String::new();
    let head_len = digits.len().saturating_sub(3);
    let head = &digits[..head_len];
    let tail = &digits[head_len..];

    // the leading group has one digit when the head length is odd
    let pair_offset = head.len() % 2;
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (i + 2 - pair_offset) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !head.is_empty() {
        grouped.push(',');
    }
    grouped.push_str(tail);

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_sci(value: f64) -> String {
    format!("{value:.2e}")
}

fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Best => "badge badge-best",
        BadgeVariant::Good => "badge badge-good",
        BadgeVariant::Baseline => "badge badge-baseline",
        BadgeVariant::Conservative => "badge badge-conservative",
    }
}

fn metric_value(model: &ModelResult, metric: Metric) -> String {
    match metric {
        Metric::FinalValue => format_inr(model.final_value),
        Metric::AnnualReturn => format_pct(model.annual_return_pct),
        Metric::AnnualVolatility => format_pct(model.annual_volatility_pct),
        Metric::WinRate => format_pct(model.win_rate_pct),
        Metric::SharpeRatio => format_sci(model.sharpe_ratio),
        Metric::SortinoRatio => format!("{:.2}", model.sortino_ratio),
        Metric::MaxDrawdown => format_inr(model.max_drawdown),
    }
}

/// Wrap a label in a tooltip span when its key is in the registry,
/// otherwise emit the plain label.
fn with_tooltip(label: &str, key: Option<&str>, tooltips: &[Tooltip]) -> String {
    match key.and_then(|k| find_tooltip(tooltips, k)) {
        Some(t) => format!(
            r#"<span class="tooltip">{}<span class="tooltip-text"><strong>{}</strong> {}</span></span>"#,
            escape_html(label),
            escape_html(t.title),
            escape_html(t.description)
        ),
        None => escape_html(label),
    }
}

pub fn render_stats_grid(stats: &[StatCard]) -> String {
    let mut out = String::new();
    for stat in stats {
        let tone = match stat.tone {
            StatTone::Positive => "stat-change positive",
            StatTone::Neutral => "stat-change",
        };
        out.push_str(&format!(
            r#"<div class="stat-card"><div class="stat-label">{}</div><div class="stat-value">{}</div><div class="{tone}">{}</div></div>"#,
            escape_html(stat.label),
            escape_html(stat.value),
            escape_html(stat.change)
        ));
    }
    out
}

pub fn render_model_cards(models: &[ModelResult], tooltips: &[Tooltip]) -> String {
    let mut out = String::new();
    for model in models {
        out.push_str(&format!(
            r#"<div class="model-card"><div class="model-header"><h3>{}</h3><span class="{}">{}</span></div><dl class="model-metrics">"#,
            with_tooltip(model.name, Some(&model.name.to_lowercase()), tooltips),
            badge_class(model.badge.variant),
            escape_html(model.badge.text)
        ));
        for &metric in Metric::ALL {
            let class = if model.highlight.contains(&metric) {
                "metric highlighted"
            } else {
                "metric"
            };
            out.push_str(&format!(
                r#"<div class="{class}"><dt>{}</dt><dd>{}</dd></div>"#,
                with_tooltip(metric.label(), metric.tooltip_key(), tooltips),
                metric_value(model, metric)
            ));
        }
        out.push_str("</dl></div>");
    }
    out
}

pub fn render_metrics_table(models: &[ModelResult], tooltips: &[Tooltip]) -> String {
    let mut out = String::from("<table class=\"metrics-table\"><thead><tr><th>Model</th>");
    for &metric in Metric::ALL {
        out.push_str(&format!(
            "<th>{}</th>",
            with_tooltip(metric.label(), metric.tooltip_key(), tooltips)
        ));
    }
    out.push_str("</tr></thead><tbody>");
    for model in models {
        out.push_str(&format!("<tr><td>{}</td>", escape_html(model.name)));
        for &metric in Metric::ALL {
            let class = if model.highlight.contains(&metric) {
                r#" class="highlighted""#
            } else {
                ""
            };
            out.push_str(&format!("<td{class}>{}</td>", metric_value(model, metric)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

pub fn render_environment(sections: &[InfoSection], tooltips: &[Tooltip]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!(
            r#"<div class="env-card"><h3>{}</h3><ul>"#,
            escape_html(section.title)
        ));
        for item in section.items {
            out.push_str(&format!(
                "<li><span>{}</span><span>{}</span></li>",
                with_tooltip(item.label, item.tooltip, tooltips),
                escape_html(item.value)
            ));
        }
        out.push_str("</ul></div>");
    }
    out
}

pub fn render_insights(insights: &[Insight]) -> String {
    let mut out = String::new();
    for insight in insights {
        out.push_str(&format!(
            r#"<div class="insight-card"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(insight.title),
            escape_html(insight.content)
        ));
    }
    out
}

pub fn render_benchmark_details(rows: &[BenchmarkRow]) -> String {
    let mut out = String::from(
        "<table class=\"benchmark-table\"><thead><tr><th>Model</th><th>Literature (FinRL)</th><th>This Work</th><th>Delta</th></tr></thead><tbody>",
    );
    for row in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:+.2} pp</td></tr>",
            escape_html(row.name),
            format_pct(row.literature_pct),
            format_pct(row.ours_pct),
            row.ours_pct - row.literature_pct
        ));
    }
    out.push_str("</tbody></table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::results::{BENCHMARKS, ENVIRONMENT, INSIGHTS, MODELS, STATS, TOOLTIPS};

    #[test]
    fn inr_grouping_splits_last_three_then_pairs() {
        assert_eq!(format_inr(4_112_426.0), "₹41,12,426");
        assert_eq!(format_inr(20_000_000.0), "₹2,00,00,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(500.0), "₹500");
        assert_eq!(format_inr(0.0), "₹0");
    }

    #[test]
    fn inr_negative_values_keep_grouping() {
        assert_eq!(format_inr(-1_103_546.0), "-₹11,03,546");
        assert_eq!(format_inr(-688_812.0), "-₹6,88,812");
    }

    #[test]
    fn sci_formatting_matches_reported_sharpe() {
        assert_eq!(format_sci(2.92e-5), "2.92e-5");
    }

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape_html(r#"a<b> & "c""#),
            "a&lt;b&gt; &amp; &quot;c&quot;"
        );
    }

    #[test]
    fn stats_grid_renders_every_card() {
        let html = render_stats_grid(STATS);
        assert_eq!(html.matches("stat-card").count(), STATS.len());
        assert!(html.contains("₹41.1L"));
        assert!(html.contains("positive"));
    }

    #[test]
    fn model_cards_carry_badges_and_highlights() {
        let html = render_model_cards(MODELS, TOOLTIPS);
        assert_eq!(html.matches("model-card").count(), MODELS.len());
        assert!(html.contains("badge-best"));
        assert!(html.contains("badge-baseline"));
        assert!(html.contains("metric highlighted"));
        assert!(html.contains("₹41,12,426"));
    }

    #[test]
    fn model_cards_wrap_known_names_in_tooltips() {
        let html = render_model_cards(MODELS, TOOLTIPS);
        assert!(html.contains("Proximal Policy Optimization"));
        assert!(html.contains("tooltip-text"));
    }

    #[test]
    fn metrics_table_has_header_and_one_row_per_model() {
        let html = render_metrics_table(MODELS, TOOLTIPS);
        assert_eq!(html.matches("<tr>").count(), MODELS.len() + 1);
        assert!(html.contains("Sortino Ratio"));
        assert!(html.contains("-₹15,06,728"));
    }

    #[test]
    fn environment_renders_all_sections_and_items() {
        let html = render_environment(ENVIRONMENT, TOOLTIPS);
        assert_eq!(html.matches("env-card").count(), ENVIRONMENT.len());
        assert!(html.contains("Stable-Baselines3"));
        assert!(html.contains("Turbulence Index"));
        // hmax item carries the max_stock explanation
        assert!(html.contains("over-concentration"));
    }

    #[test]
    fn insights_render_titles_and_bodies() {
        let html = render_insights(INSIGHTS);
        assert_eq!(html.matches("insight-card").count(), INSIGHTS.len());
        assert!(html.contains("Best Risk Management"));
    }

    #[test]
    fn benchmark_details_show_signed_delta() {
        let html = render_benchmark_details(BENCHMARKS);
        assert!(html.contains("+9.14 pp"));
        assert!(html.contains("18.00%"));
    }

    #[test]
    fn unknown_tooltip_key_falls_back_to_plain_label() {
        assert_eq!(with_tooltip("Plain", Some("nope"), TOOLTIPS), "Plain");
        assert_eq!(with_tooltip("Plain", None, TOOLTIPS), "Plain");
    }
}
