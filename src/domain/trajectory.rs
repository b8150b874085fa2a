//! Synthetic portfolio trajectory generation.
//!
//! The dashboard's line charts show month-by-month paths that geometrically
//! interpolate from the starting capital to a known final value, perturbed
//! by bounded uniform noise. Illustrative only: once noise is applied the
//! path is not monotonic and the last point is not pinned to the final value.

use rand::Rng;

use crate::domain::error::DashboardError;

/// Per-period compound growth rate that takes `seed` to `final_value` in
/// exactly `periods` steps.
pub fn growth_rate(seed: f64, final_value: f64, periods: u32) -> f64 {
    (final_value / seed).powf(1.0 / periods as f64) - 1.0
}

/// Synthesize a portfolio value path of `periods + 1` points.
///
/// Point 0 is exactly `seed`. Each subsequent point compounds the previous
/// one by the constant growth rate, plus a noise term drawn uniformly from
/// `[-0.5, 0.5] * volatility` of the compounded value. With
/// `volatility == 0` the path is exact geometric growth and the last point
/// equals `final_value` up to float rounding.
pub fn synthesize_trajectory(
    seed: f64,
    final_value: f64,
    periods: u32,
    volatility: f64,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, DashboardError> {
    if !seed.is_finite() || seed <= 0.0 {
        return Err(DashboardError::InvalidInput {
            param: "seed",
            reason: format!("must be a positive finite value, got {seed}"),
        });
    }
    if !final_value.is_finite() || final_value <= 0.0 {
        return Err(DashboardError::InvalidInput {
            param: "final_value",
            reason: format!("must be a positive finite value, got {final_value}"),
        });
    }
    if periods == 0 {
        return Err(DashboardError::InvalidInput {
            param: "periods",
            reason: "must be at least 1".to_string(),
        });
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(DashboardError::InvalidInput {
            param: "volatility",
            reason: format!("must be non-negative and finite, got {volatility}"),
        });
    }

    let rate = growth_rate(seed, final_value, periods);
    let mut points = Vec::with_capacity(periods as usize + 1);
    points.push(seed);

    let mut prev = seed;
    for _ in 0..periods {
        let trend = prev * (1.0 + rate);
        let noise = if volatility > 0.0 {
            trend * (rng.gen::<f64>() - 0.5) * volatility
        } else {
            0.0
        };
        prev = trend + noise;
        points.push(prev);
    }

    Ok(points)
}

/// Synthesize a cumulative return path in percent, starting at 0.
///
/// The stated annual return is compounded monthly with a small uniform
/// jitter per step.
pub fn synthesize_cumulative_returns(
    annual_return_pct: f64,
    periods: u32,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, DashboardError> {
    if !annual_return_pct.is_finite() {
        return Err(DashboardError::InvalidInput {
            param: "annual_return_pct",
            reason: format!("must be finite, got {annual_return_pct}"),
        });
    }
    if periods == 0 {
        return Err(DashboardError::InvalidInput {
            param: "periods",
            reason: "must be at least 1".to_string(),
        });
    }

    let monthly = (1.0 + annual_return_pct / 100.0).powf(1.0 / 12.0) - 1.0;
    let mut points = Vec::with_capacity(periods as usize + 1);
    points.push(0.0);

    let mut prev = 0.0_f64;
    for _ in 0..periods {
        let jitter = (rng.gen::<f64>() - 0.5) * 0.05;
        prev = (1.0 + prev) * (1.0 + monthly + jitter) - 1.0;
        points.push(prev * 100.0);
    }

    Ok(points)
}

/// Buy/sell/hold share of trading actions in one period, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMix {
    pub buy: u32,
    pub sell: u32,
    pub hold: u32,
}

/// Synthesize a per-period action mix. Buy and sell shares are drawn from
/// [20, 45] so the hold remainder stays non-negative and the three shares
/// always sum to 100.
pub fn synthesize_action_mix(periods: u32, rng: &mut impl Rng) -> Vec<ActionMix> {
    (0..periods)
        .map(|_| {
            let buy = rng.gen_range(20..=45);
            let sell = rng.gen_range(20..=45);
            ActionMix {
                buy,
                sell,
                hold: 100 - buy - sell,
            }
        })
        .collect()
}
