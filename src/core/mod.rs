//! Core building blocks of the scan engine: configuration and error handling.

pub mod config;
pub mod errors;

pub use config::{
    ConfigError, DEFAULT_MAX_WIDTH, DEFAULT_SENSITIVITY, SENSITIVITY_RANGE, ScanConfig,
};
pub use errors::ScanError;
