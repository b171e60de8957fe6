//! Core error types for the scan engine.
//!
//! A scan run either completes or fails synchronously; every variant here is
//! terminal for its run. There are no retries and no partial detection lists.

use thiserror::Error;

use crate::core::config::ConfigError;

/// Errors that can terminate a scan run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The supplied bytes could not be decoded into an image.
    #[error("image decode")]
    ImageDecode(#[source] image::ImageError),

    /// A run was invoked without any image bytes.
    #[error("no image supplied")]
    NoImage,

    /// The scope filter resolved to zero roster entries.
    #[error(
        "no roster entries in scope{}",
        .group.as_deref().map(|g| format!(" '{g}'")).unwrap_or_default()
    )]
    EmptyRoster {
        /// The group key the run was scoped to, if any.
        group: Option<String>,
    },

    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<image::ImageError> for ScanError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageDecode(error)
    }
}

impl ScanError {
    /// Creates an empty-roster error for the given scope.
    pub fn empty_roster(group: Option<&str>) -> Self {
        Self::EmptyRoster {
            group: group.map(str::to_owned),
        }
    }
}
