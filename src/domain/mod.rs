//! Core domain types and logic.

pub mod config_validation;
pub mod distribution;
pub mod error;
pub mod results;
pub mod trajectory;
