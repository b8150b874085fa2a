//! Configuration validation.
//!
//! Validates all dashboard config fields before rendering. Every key has a
//! default, so an absent file or empty section is valid.

use crate::domain::error::DashboardError;
use crate::domain::results;
use crate::ports::config_port::ConfigPort;

pub fn validate_dashboard_config(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    validate_initial_capital(config)?;
    validate_periods(config)?;
    validate_rng_seed(config)?;
    validate_title(config)?;
    Ok(())
}

fn validate_initial_capital(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    let value = config.get_double("series", "initial_capital", results::INITIAL_CAPITAL);
    if !value.is_finite() || value <= 0.0 {
        return Err(DashboardError::ConfigInvalid {
            section: "series".to_string(),
            key: "initial_capital".to_string(),
            reason: "initial_capital must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_periods(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    let value = config.get_int("series", "periods", results::TRADING_MONTHS as i64);
    if value < 1 {
        return Err(DashboardError::ConfigInvalid {
            section: "series".to_string(),
            key: "periods".to_string(),
            reason: "periods must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_rng_seed(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    if let Some(value) = config.get_string("series", "rng_seed") {
        if value.trim().parse::<u64>().is_err() {
            return Err(DashboardError::ConfigInvalid {
                section: "series".to_string(),
                key: "rng_seed".to_string(),
                reason: format!("rng_seed must be an unsigned integer, got '{value}'"),
            });
        }
    }
    Ok(())
}

fn validate_title(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    if let Some(value) = config.get_string("dashboard", "title") {
        if value.trim().is_empty() {
            return Err(DashboardError::ConfigInvalid {
                section: "dashboard".to_string(),
                key: "title".to_string(),
                reason: "title must not be blank".to_string(),
            });
        }
    }
    Ok(())
}

/// Resolve render settings from config, falling back to the embedded
/// experiment defaults.
pub fn build_dashboard_spec(config: &dyn ConfigPort) -> results::DashboardSpec {
    results::DashboardSpec {
        title: config
            .get_string("dashboard", "title")
            .unwrap_or_else(|| results::PROJECT.title.to_string()),
        initial_capital: config.get_double("series", "initial_capital", results::INITIAL_CAPITAL),
        periods: config.get_int("series", "periods", results::TRADING_MONTHS as i64) as u32,
    }
}

/// Seed for the chart RNG, if the config pins one.
pub fn configured_rng_seed(config: &dyn ConfigPort) -> Option<u64> {
    config
        .get_string("series", "rng_seed")
        .and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn empty_config_is_valid() {
        let config = adapter("");
        assert!(validate_dashboard_config(&config).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let config = adapter(
            "[dashboard]\ntitle = Results\n\n[series]\ninitial_capital = 1000000\nperiods = 12\nrng_seed = 7\n",
        );
        assert!(validate_dashboard_config(&config).is_ok());
    }

    #[test]
    fn non_positive_capital_is_rejected() {
        let config = adapter("[series]\ninitial_capital = 0\n");
        let err = validate_dashboard_config(&config).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigInvalid { ref key, .. } if key == "initial_capital"));
    }

    #[test]
    fn zero_periods_is_rejected() {
        let config = adapter("[series]\nperiods = 0\n");
        let err = validate_dashboard_config(&config).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigInvalid { ref key, .. } if key == "periods"));
    }

    #[test]
    fn non_numeric_rng_seed_is_rejected() {
        let config = adapter("[series]\nrng_seed = lucky\n");
        let err = validate_dashboard_config(&config).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigInvalid { ref key, .. } if key == "rng_seed"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let config = adapter("[dashboard]\ntitle =  \n");
        assert!(validate_dashboard_config(&config).is_err());
    }

    #[test]
    fn spec_uses_defaults_when_unconfigured() {
        let spec = build_dashboard_spec(&adapter(""));
        assert_eq!(spec, crate::domain::results::DashboardSpec::default());
    }

    #[test]
    fn spec_reads_overrides() {
        let config = adapter("[dashboard]\ntitle = My Run\n\n[series]\nperiods = 36\ninitial_capital = 500000\n");
        let spec = build_dashboard_spec(&config);
        assert_eq!(spec.title, "My Run");
        assert_eq!(spec.periods, 36);
        assert_eq!(spec.initial_capital, 500_000.0);
    }

    #[test]
    fn configured_seed_parses() {
        let config = adapter("[series]\nrng_seed = 99\n");
        assert_eq!(configured_rng_seed(&config), Some(99));
        assert_eq!(configured_rng_seed(&adapter("")), None);
    }
}
