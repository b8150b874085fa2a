//! Domain error types.

/// Top-level error type for drlboard.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid input for {param}: {reason}")]
    InvalidInput {
        param: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&DashboardError> for std::process::ExitCode {
    fn from(err: &DashboardError) -> Self {
        let code: u8 = match err {
            DashboardError::Io(_) | DashboardError::Csv(_) => 1,
            DashboardError::ConfigParse { .. } | DashboardError::ConfigInvalid { .. } => 2,
            DashboardError::InvalidInput { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}
