//! Configuration for the scan engine.
//!
//! All tunables are validated when the pipeline is built, not per call, so a
//! constructed [`crate::RollScan`](crate::RollScan) can never run with an
//! out-of-range sensitivity.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted range for [`ScanConfig::sensitivity`].
pub const SENSITIVITY_RANGE: RangeInclusive<f32> = 0.005..=0.12;

/// Default decision sensitivity.
pub const DEFAULT_SENSITIVITY: f32 = 0.02;

/// Default working-image width cap in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1200;

/// Errors produced by configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field value fell outside its accepted range.
    #[error("invalid value for field '{field}': expected {expected}, got {actual}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// Description of the accepted values.
        expected: String,
        /// The rejected value.
        actual: String,
    },
}

impl ConfigError {
    /// Creates an invalid-field error.
    pub fn invalid_field(
        field: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Tunables for a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Offset added to the local background ink ratio when deciding whether a
    /// tick window holds a mark; higher values are stricter (default: 0.02,
    /// accepted range 0.005..=0.12).
    pub sensitivity: f32,
    /// Maximum working-image width in pixels; wider inputs are uniformly
    /// downscaled before analysis (default: 1200).
    pub max_width: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl ScanConfig {
    /// Validates all fields, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SENSITIVITY_RANGE.contains(&self.sensitivity) || !self.sensitivity.is_finite() {
            return Err(ConfigError::invalid_field(
                "sensitivity",
                format!(
                    "a finite value in {:?}..={:?}",
                    SENSITIVITY_RANGE.start(),
                    SENSITIVITY_RANGE.end()
                ),
                self.sensitivity.to_string(),
            ));
        }
        if self.max_width == 0 {
            return Err(ConfigError::invalid_field(
                "max_width",
                "a positive pixel width",
                self.max_width.to_string(),
            ));
        }
        Ok(())
    }
}
