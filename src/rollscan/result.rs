//! Result types for a scan run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::matcher::OcrMatch;

/// Presence determination for one scoped roster member.
///
/// Detections are created fresh each run and never mutated in place; a new
/// run replaces the whole list (last run wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Identifier of the roster entry this detection maps to.
    pub person_id: String,
    /// Name of the roster entry this detection maps to.
    pub person_name: String,
    /// Whether a mark was found in this person's tick window.
    pub present: bool,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Per-run diagnostics, carried for logging and review UIs.
///
/// Consumers deciding presence should look at [`Detection`] only; these
/// numbers exist so an operator can see *why* a sheet scored the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Working image width after the cap was applied.
    pub image_width: u32,
    /// Working image height after the cap was applied.
    pub image_height: u32,
    /// Luminance threshold the mask was binarized with.
    pub ink_threshold: f32,
    /// Row bands the ink projection found before any fallback.
    pub detected_bands: usize,
    /// True when the uniform-slice fallback replaced the detected bands.
    pub uniform_fallback: bool,
    /// Tick window bounds `(x0, x1)`, when the image was non-empty.
    pub tick_window: Option<(u32, u32)>,
}

/// Aggregated result of one scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// One detection per scoped roster member, in scope order.
    pub detections: Vec<Detection>,
    /// Matches proposed by the OCR supplement; empty when no text extractor
    /// is configured or extraction failed.
    pub ocr_matches: Vec<OcrMatch>,
    /// Diagnostics for this run.
    pub stats: ScanStats,
}

impl ScanReport {
    /// Returns an iterator over the detections marked present.
    pub fn present(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter().filter(|d| d.present)
    }

    /// Number of detections marked present.
    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// Returns an iterator over OCR matches that found a roster entry.
    pub fn confirmed_ocr_matches(&self) -> impl Iterator<Item = &OcrMatch> {
        self.ocr_matches.iter().filter(|m| m.is_matched())
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Working image: {}x{} (ink threshold {:.1})",
            self.stats.image_width, self.stats.image_height, self.stats.ink_threshold
        )?;
        writeln!(
            f,
            "Row bands: {} detected{}",
            self.stats.detected_bands,
            if self.stats.uniform_fallback {
                ", uniform fallback taken"
            } else {
                ""
            }
        )?;
        match self.stats.tick_window {
            Some((x0, x1)) => writeln!(f, "Tick window: x {x0}..={x1}")?,
            None => writeln!(f, "Tick window: none (empty image)")?,
        }

        writeln!(
            f,
            "Detections: {} present of {}",
            self.present_count(),
            self.detections.len()
        )?;
        for detection in &self.detections {
            writeln!(
                f,
                "  {} -> {} (confidence: {:.3})",
                detection.person_name,
                if detection.present { "present" } else { "absent" },
                detection.confidence
            )?;
        }

        if !self.ocr_matches.is_empty() {
            writeln!(f, "OCR matches:")?;
            for m in &self.ocr_matches {
                match &m.person_name {
                    Some(name) => writeln!(f, "  '{}' -> {}", m.line, name)?,
                    None => writeln!(f, "  '{}' -> [no roster match]", m.line)?,
                }
            }
        }

        Ok(())
    }
}
