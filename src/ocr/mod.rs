//! Pluggable text-extraction provider interface.
//!
//! Text recognition is an external, best-effort collaborator: the engine
//! feature-detects a provider at build time (an [`TextExtractor`] handed to
//! the builder) and degrades gracefully when none is configured or when an
//! extraction call fails. The pixel pipeline never depends on this module's
//! output.

use std::fmt;
use std::sync::Arc;

use image::RgbImage;

/// Boxed error type returned by extraction providers.
///
/// Providers wrap arbitrary upstream failures (missing runtime, network,
/// recognition errors); the engine only logs them and falls through to the
/// pixel pipeline, so no structure beyond `Error` is required.
pub type ExtractError = Box<dyn std::error::Error + Send + Sync>;

/// A best-effort text-recognition collaborator.
///
/// Implementations receive the normalized working image and return whatever
/// text they recognized, one register row per line where possible. A failure
/// is never fatal for the scan run.
pub trait TextExtractor: fmt::Debug + Send + Sync {
    /// Recognizes text in the given image.
    fn extract_text(&self, image: &RgbImage) -> Result<String, ExtractError>;
}

/// Shared handle to an optional provider, the form the pipeline stores.
pub type SharedTextExtractor = Arc<dyn TextExtractor>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedExtractor(&'static str);

    impl TextExtractor for FixedExtractor {
        fn extract_text(&self, _image: &RgbImage) -> Result<String, ExtractError> {
            Ok(self.0.to_owned())
        }
    }

    #[test]
    fn test_trait_object_is_usable_behind_arc() {
        let extractor: SharedTextExtractor = Arc::new(FixedExtractor("alice"));
        let image = RgbImage::new(4, 4);
        assert_eq!(extractor.extract_text(&image).unwrap(), "alice");
    }
}
