//! Inline SVG chart rendering for the dashboard.
//!
//! All charts share one canvas size and palette. Each builder returns a
//! complete `<svg>` element, or an empty string when there is nothing to
//! plot (the caller substitutes placeholder text).

use crate::domain::distribution::DistributionPoint;
use crate::domain::trajectory::ActionMix;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PADDING: f64 = 48.0;

const PALETTE: &[&str] = &[
    "#f97316", "#3b82f6", "#22c55e", "#a855f7", "#eab308", "#ef4444",
];

const ACTION_COLORS: [&str; 3] = ["#22c55e", "#ef4444", "#eab308"];

pub struct LineSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub dashed: bool,
}

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

fn svg_open() -> String {
    format!(
        r#"<svg viewBox="0 0 {WIDTH:.0} {HEIGHT:.0}" xmlns="http://www.w3.org/2000/svg" role="img">"#
    )
}

fn axes() -> String {
    let right = WIDTH - PADDING;
    let bottom = HEIGHT - PADDING;
    format!(
        r##"<line x1="{PADDING:.0}" y1="{PADDING:.0}" x2="{PADDING:.0}" y2="{bottom:.0}" stroke="#0a0a0a" stroke-width="2"/><line x1="{PADDING:.0}" y1="{bottom:.0}" x2="{right:.0}" y2="{bottom:.0}" stroke="#0a0a0a" stroke-width="2"/>"##
    )
}

fn legend_entry(i: usize, label: &str, fill: &str) -> String {
    let x = PADDING + i as f64 * 150.0;
    format!(
        r#"<rect x="{x:.0}" y="8" width="10" height="10" fill="{fill}"/><text x="{:.0}" y="17" font-size="11">{label}</text>"#,
        x + 14.0
    )
}

fn value_range(series: &[LineSeries]) -> (f64, f64) {
    let min = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let max = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    (min, max)
}

/// Multi-series line chart. X positions are evenly spaced over the longest
/// series; sparse x labels are drawn at the first, middle and last slot.
pub fn line_chart(
    series: &[LineSeries],
    x_labels: &[String],
    tick: impl Fn(f64) -> String,
) -> String {
    let longest = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    if series.is_empty() || longest < 2 {
        return String::new();
    }

    let (min, max) = value_range(series);
    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let range = max - min;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = plot_width / (longest - 1) as f64;

    let mut out = svg_open();
    out.push_str(&axes());

    for (i, s) in series.iter().enumerate() {
        let points: Vec<String> = s
            .values
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let x = PADDING + j as f64 * scale_x;
                let y = HEIGHT - PADDING - (v - min) * scale_y;
                format!("{:.1},{:.1}", x, y)
            })
            .collect();
        let dash = if s.dashed {
            r#" stroke-dasharray="6 4""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2.5"{}/>"#,
            points.join(" "),
            color(i),
            dash
        ));
        out.push_str(&legend_entry(i, &s.label, color(i)));
    }

    // y-axis min/max ticks
    out.push_str(&format!(
        r#"<text x="4" y="{:.0}" font-size="10">{}</text><text x="4" y="{:.0}" font-size="10">{}</text>"#,
        PADDING + 4.0,
        tick(max),
        HEIGHT - PADDING,
        tick(min),
    ));

    for idx in [0, longest / 2, longest - 1] {
        if let Some(label) = x_labels.get(idx) {
            let x = PADDING + idx as f64 * scale_x;
            out.push_str(&format!(
                r#"<text x="{x:.0}" y="{:.0}" font-size="10" text-anchor="middle">{label}</text>"#,
                HEIGHT - PADDING + 16.0
            ));
        }
    }

    out.push_str("</svg>");
    out
}

/// Vertical bar chart for non-negative values, one color per bar.
pub fn bar_chart(bars: &[(String, f64)], unit: &str) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let max = bars.iter().fold(0.0_f64, |a, b| a.max(b.1));
    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let scale_y = if max > 0.0 { plot_height / max } else { 1.0 };
    let slot = plot_width / bars.len() as f64;
    let bar_width = slot * 0.6;

    let mut out = svg_open();
    out.push_str(&axes());

    for (i, (label, value)) in bars.iter().enumerate() {
        let height = value * scale_y;
        let x = PADDING + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = HEIGHT - PADDING - height;
        out.push_str(&format!(
            r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{}" stroke="#0a0a0a"/>"##,
            color(i)
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="middle">{value:.2}{unit}</text>"#,
            x + bar_width / 2.0,
            y - 4.0
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.0}" font-size="11" text-anchor="middle">{label}</text>"#,
            x + bar_width / 2.0,
            HEIGHT - PADDING + 16.0
        ));
    }

    out.push_str("</svg>");
    out
}

/// Horizontal bar chart for non-negative values.
pub fn hbar_chart(bars: &[(String, f64)], unit: &str) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let max = bars.iter().fold(0.0_f64, |a, b| a.max(b.1));
    let plot_width = WIDTH - 2.0 * PADDING - 60.0;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let scale_x = if max > 0.0 { plot_width / max } else { 1.0 };
    let slot = plot_height / bars.len() as f64;
    let bar_height = slot * 0.6;
    let left = PADDING + 60.0;

    let mut out = svg_open();

    for (i, (label, value)) in bars.iter().enumerate() {
        let width = value * scale_x;
        let y = PADDING + i as f64 * slot + (slot - bar_height) / 2.0;
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{label}</text>"#,
            left - 6.0,
            y + bar_height / 2.0 + 4.0
        ));
        out.push_str(&format!(
            r##"<rect x="{left:.1}" y="{y:.1}" width="{width:.1}" height="{bar_height:.1}" fill="{}" stroke="#0a0a0a"/>"##,
            color(i)
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="10">{value:.2}{unit}</text>"#,
            left + width + 6.0,
            y + bar_height / 2.0 + 4.0
        ));
    }

    out.push_str("</svg>");
    out
}

/// Two bars per group, shared scale. Used for the literature-vs-ours
/// benchmark comparison.
pub fn grouped_bar_chart(
    groups: &[(String, f64, f64)],
    label_a: &str,
    label_b: &str,
) -> String {
    if groups.is_empty() {
        return String::new();
    }

    let max = groups.iter().fold(0.0_f64, |a, g| a.max(g.1).max(g.2));
    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let scale_y = if max > 0.0 { plot_height / max } else { 1.0 };
    let slot = plot_width / groups.len() as f64;
    let bar_width = slot * 0.3;

    let mut out = svg_open();
    out.push_str(&axes());
    out.push_str(&legend_entry(0, label_a, "#a1a1aa"));
    out.push_str(&legend_entry(1, label_b, "#f97316"));

    for (i, (label, a, b)) in groups.iter().enumerate() {
        let center = PADDING + i as f64 * slot + slot / 2.0;
        for (k, (value, fill)) in [(a, "#a1a1aa"), (b, "#f97316")].iter().enumerate() {
            let height = **value * scale_y;
            let x = center - bar_width + k as f64 * bar_width;
            let y = HEIGHT - PADDING - height;
            out.push_str(&format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{fill}" stroke="#0a0a0a"/>"##
            ));
        }
        out.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.0}" font-size="11" text-anchor="middle">{label}</text>"#,
            HEIGHT - PADDING + 16.0
        ));
    }

    out.push_str("</svg>");
    out
}

/// Stacked buy/sell/hold percentage bars, one column per period.
pub fn stacked_action_chart(mixes: &[ActionMix]) -> String {
    if mixes.is_empty() {
        return String::new();
    }

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let scale_y = plot_height / 100.0;
    let slot = plot_width / mixes.len() as f64;
    let bar_width = slot * 0.7;

    let mut out = svg_open();
    out.push_str(&axes());
    for (i, label) in ["Buy", "Sell", "Hold"].iter().enumerate() {
        out.push_str(&legend_entry(i, label, ACTION_COLORS[i]));
    }

    for (i, mix) in mixes.iter().enumerate() {
        let x = PADDING + i as f64 * slot + (slot - bar_width) / 2.0;
        let mut base = HEIGHT - PADDING;
        for (share, fill) in [
            (mix.buy as f64, ACTION_COLORS[0]),
            (mix.sell as f64, ACTION_COLORS[1]),
            (mix.hold as f64, ACTION_COLORS[2]),
        ] {
            let height = share * scale_y;
            base -= height;
            out.push_str(&format!(
                r#"<rect x="{x:.1}" y="{base:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{fill}"/>"#
            ));
        }
    }

    out.push_str("</svg>");
    out
}

/// Labeled scatter plot with one point per model.
pub fn scatter_chart(points: &[(String, f64, f64)], x_title: &str, y_title: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let x_min = points.iter().fold(f64::INFINITY, |a, p| a.min(p.1));
    let x_max = points.iter().fold(f64::NEG_INFINITY, |a, p| a.max(p.1));
    let y_min = points.iter().fold(f64::INFINITY, |a, p| a.min(p.2));
    let y_max = points.iter().fold(f64::NEG_INFINITY, |a, p| a.max(p.2));

    // margin keeps extreme points off the axes
    let x_span = (x_max - x_min).max(1.0) * 1.2;
    let y_span = (y_max - y_min).max(1.0) * 1.2;
    let x_origin = x_min - (x_span - (x_max - x_min)) / 2.0;
    let y_origin = y_min - (y_span - (y_max - y_min)) / 2.0;

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let mut out = svg_open();
    out.push_str(&axes());

    for (i, (label, x_val, y_val)) in points.iter().enumerate() {
        let x = PADDING + (x_val - x_origin) / x_span * plot_width;
        let y = HEIGHT - PADDING - (y_val - y_origin) / y_span * plot_height;
        out.push_str(&format!(
            r##"<circle cx="{x:.1}" cy="{y:.1}" r="8" fill="{}" stroke="#0a0a0a" stroke-width="2"/>"##,
            color(i)
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11">{label}</text>"#,
            x + 11.0,
            y + 4.0
        ));
    }

    out.push_str(&format!(
        r#"<text x="{:.0}" y="{:.0}" font-size="11" text-anchor="middle">{x_title}</text>"#,
        WIDTH / 2.0,
        HEIGHT - 12.0
    ));
    out.push_str(&format!(
        r#"<text x="14" y="{:.0}" font-size="11" transform="rotate(-90 14 {:.0})">{y_title}</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0
    ));

    out.push_str("</svg>");
    out
}

/// Overlaid density curves over the shared fixed return-bin domain.
pub fn distribution_chart(curves: &[(String, Vec<DistributionPoint>, bool)]) -> String {
    let series: Vec<LineSeries> = curves
        .iter()
        .map(|(label, points, dashed)| LineSeries {
            label: label.clone(),
            values: points.iter().map(|p| p.y).collect(),
            dashed: *dashed,
        })
        .collect();

    let x_labels: Vec<String> = curves
        .first()
        .map(|(_, points, _)| points.iter().map(|p| format!("{:.1}%", p.x)).collect())
        .unwrap_or_default();

    line_chart(&series, &x_labels, |v| format!("{v:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn sample_series() -> Vec<LineSeries> {
        vec![
            LineSeries {
                label: "PPO".into(),
                values: vec![1.0, 2.0, 3.0, 4.0],
                dashed: false,
            },
            LineSeries {
                label: "MVO".into(),
                values: vec![1.0, 1.5, 2.0, 2.5],
                dashed: true,
            },
        ]
    }

    #[test]
    fn line_chart_draws_one_polyline_per_series() {
        let labels: Vec<String> = (0..4).map(|i| format!("Month {i}")).collect();
        let svg = line_chart(&sample_series(), &labels, |v| format!("{v:.0}"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(count(&svg, "<polyline"), 2);
        assert_eq!(count(&svg, "stroke-dasharray"), 1);
        assert!(svg.contains("Month 0"));
        assert!(svg.contains("Month 3"));
    }

    #[test]
    fn line_chart_empty_input_renders_nothing() {
        assert!(line_chart(&[], &[], |v| format!("{v}")).is_empty());
    }

    #[test]
    fn line_chart_single_point_renders_nothing() {
        let series = vec![LineSeries {
            label: "X".into(),
            values: vec![1.0],
            dashed: false,
        }];
        assert!(line_chart(&series, &[], |v| format!("{v}")).is_empty());
    }

    #[test]
    fn line_chart_flat_series_does_not_divide_by_zero() {
        let series = vec![LineSeries {
            label: "Flat".into(),
            values: vec![5.0, 5.0, 5.0],
            dashed: false,
        }];
        let svg = line_chart(&series, &[], |v| format!("{v}"));
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn bar_chart_draws_one_rect_per_bar() {
        let bars = vec![("PPO".to_string(), 27.14), ("MVO".to_string(), 16.68)];
        let svg = bar_chart(&bars, "%");
        assert_eq!(count(&svg, "<rect"), 2);
        assert!(svg.contains("27.14%"));
        assert!(svg.contains("PPO"));
    }

    #[test]
    fn hbar_chart_labels_each_row() {
        let bars = vec![("MVO".to_string(), 22.1), ("PPO".to_string(), 28.5)];
        let svg = hbar_chart(&bars, "%");
        assert_eq!(count(&svg, "<rect"), 2);
        assert!(svg.contains("22.10%"));
    }

    #[test]
    fn grouped_bar_chart_draws_two_bars_per_group() {
        let groups = vec![
            ("PPO".to_string(), 18.0, 27.14),
            ("A2C".to_string(), 17.5, 26.55),
        ];
        let svg = grouped_bar_chart(&groups, "Literature", "Ours");
        // 4 data bars + 2 legend swatches
        assert_eq!(count(&svg, "<rect"), 6);
        assert!(svg.contains("Literature"));
        assert!(svg.contains("Ours"));
    }

    #[test]
    fn stacked_action_chart_draws_three_segments_per_period() {
        let mixes = vec![
            ActionMix { buy: 30, sell: 30, hold: 40 },
            ActionMix { buy: 25, sell: 35, hold: 40 },
        ];
        let svg = stacked_action_chart(&mixes);
        // 6 segments + 3 legend swatches
        assert_eq!(count(&svg, "<rect"), 9);
    }

    #[test]
    fn scatter_chart_draws_one_circle_per_point() {
        let points = vec![
            ("PPO".to_string(), 28.5, 27.14),
            ("DDPG".to_string(), 26.2, 25.33),
        ];
        let svg = scatter_chart(&points, "Annual Volatility %", "Annual Return %");
        assert_eq!(count(&svg, "<circle"), 2);
        assert!(svg.contains("Annual Volatility %"));
    }

    #[test]
    fn distribution_chart_plots_every_curve() {
        let curve = crate::domain::distribution::synthesize_distribution(0.0, 1.0).unwrap();
        let curves = vec![
            ("PPO".to_string(), curve.clone(), false),
            ("MVO".to_string(), curve, true),
        ];
        let svg = distribution_chart(&curves);
        assert_eq!(count(&svg, "<polyline"), 2);
        assert!(svg.contains("-4.0%"));
        assert!(svg.contains("4.0%"));
    }

    #[test]
    fn empty_inputs_render_nothing() {
        assert!(bar_chart(&[], "%").is_empty());
        assert!(hbar_chart(&[], "%").is_empty());
        assert!(grouped_bar_chart(&[], "a", "b").is_empty());
        assert!(stacked_action_chart(&[]).is_empty());
        assert!(scatter_chart(&[], "x", "y").is_empty());
        assert!(distribution_chart(&[]).is_empty());
    }
}
