//! Dashboard output port trait.

use crate::domain::error::DashboardError;
use crate::domain::results::DashboardSpec;

/// Port for writing the rendered dashboard.
///
/// `rng_seed` pins the chart noise source for reproducible output; `None`
/// draws a fresh seed from entropy.
pub trait DashboardPort {
    fn write(
        &self,
        spec: &DashboardSpec,
        rng_seed: Option<u64>,
        output_path: &str,
    ) -> Result<(), DashboardError>;
}
