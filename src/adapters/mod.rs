//! Concrete adapter implementations for ports.

pub mod csv_export;
pub mod file_config_adapter;
pub mod html_dashboard;
