//! CSV export of the synthesized chart series.
//!
//! Lets the plotted paths be inspected or re-plotted outside the dashboard.
//! Column order follows the chart legend order.

use std::path::Path;

use rand::Rng;

use crate::domain::distribution::{domain_samples, synthesize_distribution};
use crate::domain::error::DashboardError;
use crate::domain::results::{DISTRIBUTIONS, DashboardSpec, TRAJECTORIES};
use crate::domain::trajectory::synthesize_trajectory;

/// Write one row per month: month index followed by the portfolio value of
/// each trajectory series.
pub fn export_trajectories<P: AsRef<Path>>(
    spec: &DashboardSpec,
    rng: &mut impl Rng,
    path: P,
) -> Result<(), DashboardError> {
    let mut series = Vec::with_capacity(TRAJECTORIES.len());
    for t in TRAJECTORIES {
        let values =
            synthesize_trajectory(spec.initial_capital, t.final_value, spec.periods, t.volatility, rng)?;
        series.push((t.label, values));
    }

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["month".to_string()];
    header.extend(series.iter().map(|(label, _)| label.to_string()));
    writer.write_record(&header)?;

    for month in 0..=spec.periods as usize {
        let mut row = vec![month.to_string()];
        row.extend(series.iter().map(|(_, values)| format!("{:.2}", values[month])));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one row per return bin: bin midpoint in percent followed by the
/// scaled density of each distribution curve.
pub fn export_distributions<P: AsRef<Path>>(path: P) -> Result<(), DashboardError> {
    let mut curves = Vec::with_capacity(DISTRIBUTIONS.len());
    for d in DISTRIBUTIONS {
        curves.push((d.label, synthesize_distribution(d.mean, d.std_dev)?));
    }

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["return_pct".to_string()];
    header.extend(curves.iter().map(|(label, _)| label.to_string()));
    writer.write_record(&header)?;

    for i in 0..domain_samples() {
        let mut row = vec![format!("{:.1}", curves[0].1[i].x)];
        row.extend(curves.iter().map(|(_, points)| format!("{:.4}", points[i].y)));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
