//! Row segmentation: locating the horizontal text-line bands of a register.
//!
//! Ink is projected onto the vertical axis over the left portion of the sheet
//! only (the name column), so that check-marks on the right never smear two
//! adjacent rows together. When the projection is too noisy to produce a
//! plausible band count, the segmenter falls back to slicing the covered span
//! uniformly — every scoped person is then guaranteed a row position, at the
//! cost of per-row accuracy.

use crate::processors::ink::InkMask;

/// Fraction of the image width treated as the name column.
const NAME_REGION_FRACTION: f32 = 0.6;
/// Fraction of the mean row ink a row must exceed to count as active.
const ACTIVITY_FRACTION: f32 = 0.12;
/// Absolute floor for the activity threshold, in ink pixels.
const MIN_ACTIVE_INK: f32 = 2.0;

/// One contiguous run of vertically active rows.
///
/// `y0 <= center <= y1`; bands are emitted top-to-bottom and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band.
    pub y0: u32,
    /// Last row of the band (inclusive).
    pub y1: u32,
    /// Midpoint row, the anchor the classifier scans around.
    pub center: u32,
}

impl RowBand {
    fn spanning(y0: u32, y1: u32) -> Self {
        Self {
            y0,
            y1,
            center: (y0 + y1) / 2,
        }
    }
}

/// Segmentation outcome: the bands to score, plus how they were obtained.
#[derive(Debug, Clone)]
pub struct RowSegmentation {
    /// Row bands in top-to-bottom order.
    pub bands: Vec<RowBand>,
    /// Number of bands the ink projection itself produced, before any
    /// fallback replaced them.
    pub detected_bands: usize,
    /// True when the uniform-slice fallback replaced the detected bands.
    pub uniform_fallback: bool,
}

/// Segments the mask into row bands, one per scoped roster entry if needed.
///
/// Detected bands win when their count is plausible for a roster of
/// `roster_len` (at least `max(3, roster_len / 2)`); otherwise the span from
/// the first to the last detected band (or the whole image height when none
/// were detected) is divided into `roster_len` equal slices. The fallback
/// guarantees exactly `roster_len` row positions on arbitrarily noisy input.
pub fn segment_rows(mask: &InkMask, roster_len: usize) -> RowSegmentation {
    let detected = detect_bands(mask);
    let detected_count = detected.len();

    let min_expected = (roster_len as f32 / 2.0).max(3.0);
    if (detected_count as f32) >= min_expected {
        tracing::debug!(bands = detected_count, "row projection accepted");
        return RowSegmentation {
            bands: detected,
            detected_bands: detected_count,
            uniform_fallback: false,
        };
    }

    let span = match (detected.first(), detected.last()) {
        (Some(first), Some(last)) => (first.y0, last.y1 + 1),
        _ => (0, mask.height()),
    };
    let bands = uniform_slices(span.0, span.1, roster_len);
    tracing::debug!(
        detected = detected_count,
        slices = bands.len(),
        span_y0 = span.0,
        span_y1 = span.1,
        "row projection too sparse, slicing span uniformly"
    );

    RowSegmentation {
        bands,
        detected_bands: detected_count,
        uniform_fallback: true,
    }
}

/// Estimates the vertical distance between adjacent register rows.
///
/// Uses the mean center-to-center distance when at least two bands exist,
/// otherwise assumes the roster fills the image height evenly.
pub fn estimate_row_spacing(bands: &[RowBand], image_height: u32, roster_len: usize) -> f32 {
    if bands.len() >= 2 {
        let first = bands[0].center as f32;
        let last = bands[bands.len() - 1].center as f32;
        ((last - first) / (bands.len() - 1) as f32).max(1.0)
    } else {
        (image_height as f32 / roster_len.max(1) as f32).max(1.0)
    }
}

/// Projects ink onto the vertical axis over the name column and merges
/// consecutive active rows into bands.
fn detect_bands(mask: &InkMask) -> Vec<RowBand> {
    if mask.is_empty() {
        return Vec::new();
    }

    let name_width = ((mask.width() as f32 * NAME_REGION_FRACTION) as u32).min(mask.width());
    let row_ink: Vec<u32> = (0..mask.height())
        .map(|y| (0..name_width).filter(|&x| mask.is_ink(x, y)).count() as u32)
        .collect();

    let mean_row_ink = row_ink.iter().sum::<u32>() as f32 / row_ink.len() as f32;
    let activity_floor = (mean_row_ink * ACTIVITY_FRACTION).max(MIN_ACTIVE_INK);

    let mut bands = Vec::new();
    let mut open: Option<(u32, u32)> = None;
    for (y, &ink) in row_ink.iter().enumerate() {
        let y = y as u32;
        if ink as f32 > activity_floor {
            open = match open {
                Some((y0, _)) => Some((y0, y)),
                None => Some((y, y)),
            };
        } else if let Some((y0, y1)) = open.take() {
            bands.push(RowBand::spanning(y0, y1));
        }
    }
    if let Some((y0, y1)) = open {
        bands.push(RowBand::spanning(y0, y1));
    }

    bands
}

/// Divides `[y0, y1)` into `count` equal-height slices, one band per slice.
fn uniform_slices(y0: u32, y1: u32, count: usize) -> Vec<RowBand> {
    if count == 0 {
        return Vec::new();
    }
    let span_start = y0.min(y1) as f32;
    let slice_height = (y1.saturating_sub(y0)) as f32 / count as f32;

    (0..count)
        .map(|i| {
            let top = span_start + i as f32 * slice_height;
            let bottom = (span_start + (i + 1) as f32 * slice_height - 1.0).max(top);
            RowBand::spanning(top as u32, bottom as u32)
        })
        .collect()
}
