//! HTML dashboard adapter implementing DashboardPort.
//!
//! Renders the embedded experiment results into a single self-contained
//! HTML page: placeholder substitution over a template, with charts as
//! inline SVG and no script or network dependencies.

pub mod charts;
pub mod default_template;
pub mod sections;

use std::fs;
use std::path::Path;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::distribution::synthesize_distribution;
use crate::domain::error::DashboardError;
use crate::domain::results::{
    BENCHMARKS, CUMULATIVE_RETURNS, DISTRIBUTIONS, DashboardSpec, ENVIRONMENT, INSIGHTS, MODELS,
    PROJECT, STATS, TOOLTIPS, TRAJECTORIES,
};
use crate::domain::trajectory::{
    synthesize_action_mix, synthesize_cumulative_returns, synthesize_trajectory,
};
use crate::ports::dashboard_port::DashboardPort;

use charts::LineSeries;
use sections::escape_html;

fn month_labels(periods: u32) -> Vec<String> {
    (0..=periods).map(|i| format!("Month {i}")).collect()
}

fn portfolio_chart(spec: &DashboardSpec, rng: &mut impl Rng) -> Result<String, DashboardError> {
    let mut series = Vec::with_capacity(TRAJECTORIES.len());
    for t in TRAJECTORIES {
        let values =
            synthesize_trajectory(spec.initial_capital, t.final_value, spec.periods, t.volatility, rng)?;
        series.push(LineSeries {
            label: t.label.to_string(),
            values,
            dashed: t.dashed,
        });
    }
    Ok(charts::line_chart(&series, &month_labels(spec.periods), |v| {
        format!("₹{:.1}Cr", v / 1e7)
    }))
}

fn cumulative_chart(spec: &DashboardSpec, rng: &mut impl Rng) -> Result<String, DashboardError> {
    let mut series = Vec::with_capacity(CUMULATIVE_RETURNS.len());
    for c in CUMULATIVE_RETURNS {
        let values = synthesize_cumulative_returns(c.annual_return_pct, spec.periods, rng)?;
        series.push(LineSeries {
            label: c.label.to_string(),
            values,
            dashed: c.dashed,
        });
    }
    Ok(charts::line_chart(&series, &month_labels(spec.periods), |v| {
        format!("{v:.0}%")
    }))
}

fn distribution_chart() -> Result<String, DashboardError> {
    let mut curves = Vec::with_capacity(DISTRIBUTIONS.len());
    for d in DISTRIBUTIONS {
        let points = synthesize_distribution(d.mean, d.std_dev)?;
        curves.push((d.label.to_string(), points, d.dashed));
    }
    Ok(charts::distribution_chart(&curves))
}

fn returns_chart() -> String {
    let mut bars: Vec<(String, f64)> = MODELS
        .iter()
        .map(|m| (m.name.to_string(), m.annual_return_pct))
        .collect();
    bars.sort_by(|a, b| b.1.total_cmp(&a.1));
    charts::bar_chart(&bars, "%")
}

fn volatility_chart() -> String {
    let mut bars: Vec<(String, f64)> = MODELS
        .iter()
        .map(|m| (m.name.to_string(), m.annual_volatility_pct))
        .collect();
    bars.sort_by(|a, b| a.1.total_cmp(&b.1));
    charts::hbar_chart(&bars, "%")
}

fn risk_return_chart() -> String {
    let points: Vec<(String, f64, f64)> = MODELS
        .iter()
        .map(|m| (m.name.to_string(), m.annual_volatility_pct, m.annual_return_pct))
        .collect();
    charts::scatter_chart(&points, "Annual Volatility (%)", "Annual Return (%)")
}

fn benchmark_chart() -> String {
    let groups: Vec<(String, f64, f64)> = BENCHMARKS
        .iter()
        .map(|b| (b.name.to_string(), b.literature_pct, b.ours_pct))
        .collect();
    charts::grouped_bar_chart(&groups, "Literature (FinRL)", "This Work")
}

/// Substitute every placeholder in `template` with rendered content.
pub fn resolve(
    template: &str,
    spec: &DashboardSpec,
    rng: &mut impl Rng,
) -> Result<String, DashboardError> {
    let actions = synthesize_action_mix(spec.periods, rng);
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let output = template
        .replace("{{PROJECT_TITLE}}", &escape_html(&spec.title))
        .replace("{{PROJECT_SUBTITLE}}", &escape_html(PROJECT.subtitle))
        .replace("{{PROJECT_DESCRIPTION}}", &escape_html(PROJECT.description))
        .replace("{{STATS_GRID}}", &sections::render_stats_grid(STATS))
        .replace("{{PORTFOLIO_CHART}}", &portfolio_chart(spec, rng)?)
        .replace("{{RETURNS_CHART}}", &returns_chart())
        .replace("{{RISK_RETURN_CHART}}", &risk_return_chart())
        .replace("{{BENCHMARK_CHART}}", &benchmark_chart())
        .replace(
            "{{BENCHMARK_DETAILS}}",
            &sections::render_benchmark_details(BENCHMARKS),
        )
        .replace("{{CUMULATIVE_CHART}}", &cumulative_chart(spec, rng)?)
        .replace("{{ACTIONS_CHART}}", &charts::stacked_action_chart(&actions))
        .replace("{{DISTRIBUTION_CHART}}", &distribution_chart()?)
        .replace("{{VOLATILITY_CHART}}", &volatility_chart())
        .replace(
            "{{MODEL_CARDS}}",
            &sections::render_model_cards(MODELS, TOOLTIPS),
        )
        .replace(
            "{{METRICS_TABLE}}",
            &sections::render_metrics_table(MODELS, TOOLTIPS),
        )
        .replace(
            "{{ENVIRONMENT_GRID}}",
            &sections::render_environment(ENVIRONMENT, TOOLTIPS),
        )
        .replace("{{INSIGHTS_GRID}}", &sections::render_insights(INSIGHTS))
        .replace("{{GENERATED_AT}}", &generated_at);

    Ok(output)
}

pub struct HtmlDashboardAdapter {
    template: Option<String>,
}

impl HtmlDashboardAdapter {
    pub fn new() -> Self {
        Self { template: None }
    }

    /// Use a caller-supplied template instead of the built-in page.
    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }
}

impl Default for HtmlDashboardAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPort for HtmlDashboardAdapter {
    fn write(
        &self,
        spec: &DashboardSpec,
        rng_seed: Option<u64>,
        output_path: &str,
    ) -> Result<(), DashboardError> {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let template = self
            .template
            .as_deref()
            .unwrap_or_else(|| default_template::template());
        let html = resolve(template, spec, &mut rng)?;

        if let Some(parent) = Path::new(output_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, html)?;
        Ok(())
    }
}
