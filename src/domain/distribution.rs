//! Sampled Gaussian density curve for the daily returns distribution chart.

use crate::domain::error::DashboardError;

/// Daily return bins in percent, fixed regardless of the curve parameters.
pub const DOMAIN_MIN: f64 = -4.0;
pub const DOMAIN_MAX: f64 = 4.0;
pub const DOMAIN_STEP: f64 = 0.5;

/// Visual amplitude scaling; the curve is not probability-normalized.
const AMPLITUDE: f64 = 100.0;

/// A sampled (x, y) pair: x is the return bin in percent, y the scaled density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionPoint {
    pub x: f64,
    pub y: f64,
}

/// Number of samples across the fixed domain (17 for -4.0..=4.0 at 0.5).
pub fn domain_samples() -> usize {
    ((DOMAIN_MAX - DOMAIN_MIN) / DOMAIN_STEP) as usize + 1
}

/// Sample a Gaussian density with the given mean and standard deviation
/// over the fixed domain, scaled for chart amplitude.
pub fn synthesize_distribution(
    mean: f64,
    std_dev: f64,
) -> Result<Vec<DistributionPoint>, DashboardError> {
    if !mean.is_finite() {
        return Err(DashboardError::InvalidInput {
            param: "mean",
            reason: format!("must be finite, got {mean}"),
        });
    }
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(DashboardError::InvalidInput {
            param: "std_dev",
            reason: format!("must be a positive finite value, got {std_dev}"),
        });
    }

    let norm = 1.0 / (std_dev * (2.0 * std::f64::consts::PI).sqrt());
    let curve = (0..domain_samples())
        .map(|i| {
            let x = DOMAIN_MIN + i as f64 * DOMAIN_STEP;
            let z = (x - mean) / std_dev;
            DistributionPoint {
                x,
                y: norm * (-0.5 * z * z).exp() * AMPLITUDE,
            }
        })
        .collect();

    Ok(curve)
}
