//! # Stage Definition: Scan Orchestration
//!
//! This service is considered "Done" when it fulfills the following contract:
//!
//! - **Inputs**: raw image bytes (or a pre-decoded `RgbImage`), a read-only
//!   roster, and an optional group scope.
//! - **Outputs**: a [`ScanReport`] with exactly one [`Detection`] per scoped
//!   roster member, in scope order, plus OCR matches when a text extractor is
//!   configured and succeeds.
//! - **Logging**: traces each stage outcome; the swallowed OCR failure is
//!   logged at `warn`.
//! - **Invariants**:
//!     - A run is synchronous and single-threaded; it completes or fails,
//!       with no partial detections.
//!     - Confidence is always within `[0, 1]`.
//!     - Identical inputs produce identical reports.
//!     - A text-extraction failure never invalidates the pixel pipeline.

use std::borrow::Cow;

use image::RgbImage;

use crate::core::{ScanConfig, ScanError};
use crate::domain::{RosterEntry, filter_scope, match_text};
use crate::ocr::SharedTextExtractor;
use crate::processors::{
    RowScore, decode_register_image, binarize, estimate_row_spacing, locate_tick_window,
    scan_band_height, score_row, segment_rows, shrink_to_width,
};
use crate::rollscan::result::{Detection, ScanReport, ScanStats};

/// Builder for a [`RollScan`] engine.
///
/// # Example
///
/// ```no_run
/// use rollscan::{RollScan, RosterEntry};
///
/// let engine = RollScan::builder()
///     .sensitivity(0.03)
///     .build()
///     .expect("valid configuration");
///
/// let roster = vec![RosterEntry::new("17", "Alice Arnold", "year-7")];
/// let photo = std::fs::read("register.jpg").expect("photo");
/// let report = engine.classify(&photo, &roster, Some("year-7")).expect("scan");
/// println!("{report}");
/// ```
#[derive(Debug, Default)]
pub struct RollScanBuilder {
    config: ScanConfig,
    text_extractor: Option<SharedTextExtractor>,
}

impl RollScanBuilder {
    /// Creates a builder with default configuration and no text extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decision sensitivity (accepted range 0.005..=0.12; higher is
    /// stricter).
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.config.sensitivity = sensitivity;
        self
    }

    /// Sets the working-image width cap in pixels.
    pub fn max_width(mut self, max_width: u32) -> Self {
        self.config.max_width = max_width;
        self
    }

    /// Replaces the whole configuration at once.
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches an optional text-extraction collaborator.
    ///
    /// Extraction is best-effort: failures are logged and the pixel pipeline
    /// result stands on its own.
    pub fn text_extractor(mut self, extractor: SharedTextExtractor) -> Self {
        self.text_extractor = Some(extractor);
        self
    }

    /// Validates the configuration and builds the engine.
    pub fn build(self) -> Result<RollScan, ScanError> {
        self.config.validate()?;
        Ok(RollScan {
            config: self.config,
            text_extractor: self.text_extractor,
        })
    }
}

/// The attendance-mark detection engine.
///
/// A `RollScan` holds only validated configuration and the optional text
/// extractor; every call to [`classify`](Self::classify) is an independent
/// run whose buffers are dropped when the report is returned. Callers wanting
/// to "cancel" a run simply discard its result.
#[derive(Debug)]
pub struct RollScan {
    config: ScanConfig,
    text_extractor: Option<SharedTextExtractor>,
}

impl RollScan {
    /// Starts building an engine.
    pub fn builder() -> RollScanBuilder {
        RollScanBuilder::new()
    }

    /// The validated configuration this engine runs with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Classifies a photographed register against the scoped roster.
    ///
    /// Returns exactly one detection per scoped member, in scope order. The
    /// mapping from sheet rows to people is positional: `scope[i]` is scored
    /// against the i-th row band, so the scope order must match the physical
    /// sheet order. Callers are advised to always scope by group — the
    /// positional assumption breaks down across mixed groups.
    pub fn classify(
        &self,
        bytes: &[u8],
        roster: &[RosterEntry],
        group: Option<&str>,
    ) -> Result<ScanReport, ScanError> {
        if bytes.is_empty() {
            return Err(ScanError::NoImage);
        }
        let image = decode_register_image(bytes, self.config.max_width)?;
        self.classify_image(&image, roster, group)
    }

    /// Same pipeline as [`classify`](Self::classify) for callers that already
    /// hold a decoded frame; skips the decode step but still applies the
    /// working-width cap.
    pub fn classify_image(
        &self,
        image: &RgbImage,
        roster: &[RosterEntry],
        group: Option<&str>,
    ) -> Result<ScanReport, ScanError> {
        let scope = filter_scope(roster, group);
        if scope.is_empty() {
            return Err(ScanError::empty_roster(group));
        }

        let working = shrink_to_width(image, self.config.max_width);
        let mask = binarize(&working);

        let segmentation = segment_rows(&mask, scope.len());
        let window = locate_tick_window(&mask);
        let spacing = estimate_row_spacing(&segmentation.bands, mask.height(), scope.len());
        let scan_height = scan_band_height(spacing);

        let detections: Vec<Detection> = scope
            .iter()
            .enumerate()
            .map(|(i, person)| {
                let score = match (segmentation.bands.get(i), &window) {
                    (Some(band), Some(window)) => score_row(
                        &mask,
                        band.center,
                        scan_height,
                        window,
                        self.config.sensitivity,
                    ),
                    // The segmenter's fallback guarantees one band per
                    // person; a missing band or window scores absent.
                    _ => RowScore::absent(),
                };
                Detection {
                    person_id: person.id.clone(),
                    person_name: person.name.clone(),
                    present: score.present,
                    confidence: score.confidence,
                }
            })
            .collect();

        let ocr_matches = self.recognize_and_match(&working, &scope);

        let stats = ScanStats {
            image_width: mask.width(),
            image_height: mask.height(),
            ink_threshold: mask.threshold(),
            detected_bands: segmentation.detected_bands,
            uniform_fallback: segmentation.uniform_fallback,
            tick_window: window.map(|w| (w.x0, w.x1)),
        };
        tracing::debug!(
            present = detections.iter().filter(|d| d.present).count(),
            total = detections.len(),
            ocr_matches = ocr_matches.len(),
            "scan run complete"
        );

        Ok(ScanReport {
            detections,
            ocr_matches,
            stats,
        })
    }

    /// Runs the optional text extractor and matches its output against the
    /// scoped roster. Any extraction failure is swallowed here — the only
    /// automatic recovery in the engine.
    fn recognize_and_match(
        &self,
        working: &Cow<'_, RgbImage>,
        scope: &[&RosterEntry],
    ) -> Vec<crate::domain::OcrMatch> {
        let Some(extractor) = &self.text_extractor else {
            return Vec::new();
        };

        match extractor.extract_text(working) {
            Ok(text) => {
                let scoped: Vec<RosterEntry> = scope.iter().map(|&e| e.clone()).collect();
                match_text(&text, &scoped)
            }
            Err(error) => {
                tracing::warn!(%error, "text extraction failed, using pixel pipeline only");
                Vec::new()
            }
        }
    }
}
