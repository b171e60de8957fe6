//! Presence scoring: deciding whether a row's tick window holds a mark.
//!
//! Two gates must both pass: the window's ink ratio has to clear a locally
//! normalized adaptive threshold (background ink density immediately left of
//! the window, plus the caller's sensitivity offset), and the longest
//! contiguous ink run has to reach a width floor. Ratio alone false-positives
//! on smudges; blob size alone on uniformly darker scans.

use crate::processors::ink::InkMask;
use crate::processors::tick::TickWindow;

/// Fraction of the row spacing scanned around each band center.
const SCAN_BAND_FRACTION: f32 = 0.6;
/// Absolute floor for the adaptive threshold.
const MIN_ADAPTIVE_THRESHOLD: f32 = 0.01;
/// Fraction of the window width a blob must span.
const BLOB_WIDTH_FRACTION: f32 = 0.4;
/// Absolute floor for the blob gate, in pixels.
const MIN_BLOB_PX: f32 = 3.0;
/// Ink ratio treated as full confidence.
const FULL_CONFIDENCE_RATIO: f32 = 0.5;

/// Scoring outcome for one row band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowScore {
    /// Whether both presence gates passed.
    pub present: bool,
    /// Confidence in `[0, 1]`; zero whenever the window is indistinguishable
    /// from its background.
    pub confidence: f32,
    /// Ink ratio inside the scanned window.
    pub ink_ratio: f32,
    /// Ink ratio of the background sample left of the window.
    pub background_ratio: f32,
    /// Longest contiguous ink run along any scanned row, in pixels.
    pub max_blob: u32,
}

impl RowScore {
    /// The score of a row that could not be scanned at all.
    pub fn absent() -> Self {
        Self {
            present: false,
            confidence: 0.0,
            ink_ratio: 0.0,
            background_ratio: 0.0,
            max_blob: 0,
        }
    }
}

/// Height of the scan band for a given row spacing.
pub fn scan_band_height(row_spacing: f32) -> u32 {
    (row_spacing * SCAN_BAND_FRACTION).round().max(1.0) as u32
}

/// Scores the tick window around one band center.
pub fn score_row(
    mask: &InkMask,
    center: u32,
    scan_height: u32,
    window: &TickWindow,
    sensitivity: f32,
) -> RowScore {
    if mask.is_empty() {
        return RowScore::absent();
    }

    let half = scan_height / 2;
    let y0 = center.saturating_sub(half).min(mask.height() - 1);
    let y1 = (center + half).min(mask.height() - 1);

    let mut dark = 0u32;
    let mut max_blob = 0u32;
    for y in y0..=y1 {
        let mut run = 0u32;
        for x in window.x0..=window.x1 {
            if mask.is_ink(x, y) {
                dark += 1;
                run += 1;
                max_blob = max_blob.max(run);
            } else {
                run = 0;
            }
        }
    }
    let total = (y1 - y0 + 1) * window.width();
    let ink_ratio = dark as f32 / total as f32;

    let background_ratio = background_ratio(mask, y0, y1, window);
    let adaptive_threshold = (background_ratio + sensitivity).max(MIN_ADAPTIVE_THRESHOLD);
    let min_blob_px = (window.width() as f32 * BLOB_WIDTH_FRACTION).max(MIN_BLOB_PX);

    let present = ink_ratio > adaptive_threshold && max_blob as f32 >= min_blob_px;

    let conf_base = if adaptive_threshold >= FULL_CONFIDENCE_RATIO {
        0.0
    } else {
        ((ink_ratio - adaptive_threshold) / (FULL_CONFIDENCE_RATIO - adaptive_threshold))
            .clamp(0.0, 1.0)
    };
    let blob_factor = (max_blob as f32 / (2.0 * window.width() as f32)).clamp(0.0, 1.0);
    let confidence = conf_base * blob_factor;

    RowScore {
        present,
        confidence,
        ink_ratio,
        background_ratio,
        max_blob,
    }
}

/// Ink ratio of an equal-height band immediately left of the tick window,
/// twice the window's width, clipped to the available space. Zero when the
/// window touches the left edge.
fn background_ratio(mask: &InkMask, y0: u32, y1: u32, window: &TickWindow) -> f32 {
    if window.x0 == 0 {
        return 0.0;
    }
    let bg_x1 = window.x0 - 1;
    let bg_x0 = window.x0.saturating_sub(2 * window.width());

    let mut dark = 0u32;
    for y in y0..=y1 {
        for x in bg_x0..=bg_x1 {
            if mask.is_ink(x, y) {
                dark += 1;
            }
        }
    }
    let total = (y1 - y0 + 1) * (bg_x1 - bg_x0 + 1);
    dark as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::ink::binarize;
    use crate::processors::tick::TickWindow;
    use image::{Rgb, RgbImage};

    const WINDOW: TickWindow = TickWindow { x0: 140, x1: 164 };

    fn white_page() -> RgbImage {
        RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]))
    }

    fn fill(image: &mut RgbImage, x0: u32, x1: u32, y0: u32, y1: u32) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                image.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }

    #[test]
    fn test_solid_tick_scores_present() {
        let mut image = white_page();
        fill(&mut image, 145, 160, 46, 54);
        let score = score_row(&binarize(&image), 50, 18, &WINDOW, 0.02);

        assert!(score.present);
        assert!(score.confidence > 0.0 && score.confidence <= 1.0);
        assert_eq!(score.max_blob, 16);
    }

    #[test]
    fn test_empty_window_scores_absent_with_zero_confidence() {
        let score = score_row(&binarize(&white_page()), 50, 18, &WINDOW, 0.02);

        assert!(!score.present);
        assert_eq!(score.confidence, 0.0);
        assert_eq!(score.max_blob, 0);
    }

    #[test]
    fn test_scattered_speckle_fails_the_blob_gate() {
        // Plenty of ink by ratio, but no run longer than 2 px. The window is
        // 25 px wide, so the gate wants at least 10.
        let mut image = white_page();
        for y in (42..=58).step_by(2) {
            for x in (140..=164).step_by(3) {
                image.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let score = score_row(&binarize(&image), 50, 18, &WINDOW, 0.005);

        assert!(score.ink_ratio > 0.01, "speckle should clear the ratio gate");
        assert!(score.max_blob < 10);
        assert!(!score.present);
    }

    #[test]
    fn test_inky_background_raises_the_threshold() {
        // Same tick twice; the second sheet has a heavily smudged area left
        // of the window, which must suppress the detection.
        let mut clean = white_page();
        fill(&mut clean, 150, 160, 48, 52);

        let mut smudged = clean.clone();
        fill(&mut smudged, 90, 139, 40, 60);

        let clean_score = score_row(&binarize(&clean), 50, 18, &WINDOW, 0.02);
        let smudged_score = score_row(&binarize(&smudged), 50, 18, &WINDOW, 0.02);

        assert!(clean_score.present);
        assert!(smudged_score.background_ratio > clean_score.background_ratio);
        assert!(smudged_score.confidence < clean_score.confidence);
    }

    #[test]
    fn test_sensitivity_is_monotonic() {
        let mut image = white_page();
        fill(&mut image, 148, 162, 47, 53);
        let mask = binarize(&image);

        let lax = score_row(&mask, 50, 18, &WINDOW, 0.005);
        let strict = score_row(&mask, 50, 18, &WINDOW, 0.12);

        assert!(lax.confidence >= strict.confidence);
        assert!(lax.present || !strict.present);
    }

    #[test]
    fn test_confidence_never_leaves_unit_interval() {
        // A window that is all ink pushes every intermediate term to its
        // extreme.
        let mut image = white_page();
        fill(&mut image, 140, 164, 40, 60);
        let score = score_row(&binarize(&image), 50, 18, &WINDOW, 0.005);

        assert!(score.present);
        assert!((0.0..=1.0).contains(&score.confidence));
        assert_eq!(score.confidence, 1.0 * (25.0 / 50.0));
    }

    #[test]
    fn test_band_near_image_edge_is_clipped_not_panicking() {
        let mut image = white_page();
        fill(&mut image, 145, 160, 0, 4);
        let score = score_row(&binarize(&image), 1, 18, &WINDOW, 0.02);
        assert!(score.present);
    }

    #[test]
    fn test_scan_band_height_floors_at_one() {
        assert_eq!(scan_band_height(30.0), 18);
        assert_eq!(scan_band_height(0.5), 1);
    }
}
