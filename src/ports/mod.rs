//! Port traits decoupling the domain from concrete adapters.

pub mod config_port;
pub mod dashboard_port;
