//! Luminance computation and binarization into an ink mask.
//!
//! The binarization threshold is anchored to the brightness distribution of
//! the photographed page rather than a fixed constant: the median luminance,
//! scaled down and clamped, tolerates dim phone photos and washed-out scans
//! alike. A pixel is "ink" iff its luminance falls below the threshold.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Lower clamp for the binarization threshold.
pub const MIN_INK_THRESHOLD: f32 = 40.0;
/// Upper clamp for the binarization threshold.
pub const MAX_INK_THRESHOLD: f32 = 220.0;

/// Fraction of the median luminance used as the threshold.
const MEDIAN_SCALE: f32 = 0.9;

/// Binary ink/no-ink grid for one working image.
///
/// Backed by a `GrayImage` where ink cells hold 255, which keeps the mask
/// directly writable to disk when debugging a misbehaving register photo.
#[derive(Debug, Clone)]
pub struct InkMask {
    mask: GrayImage,
    threshold: f32,
}

impl InkMask {
    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    /// Returns true when the mask has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The luminance threshold this mask was binarized with.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether the cell at `(x, y)` is ink.
    ///
    /// Callers stay within bounds; the underlying buffer panics otherwise,
    /// matching `GrayImage` indexing.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.mask.get_pixel(x, y)[0] != 0
    }
}

/// Weighted RGB luminance of one pixel.
pub fn luminance(pixel: &Rgb<u8>) -> f32 {
    0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32
}

/// Binarizes a working image into an [`InkMask`].
///
/// Threshold: `clamp(median(luminance) * 0.9, 40, 220)`. A zero-dimension
/// image yields an empty mask; downstream stages treat that as zero active
/// rows and all-absent detections.
pub fn binarize(image: &RgbImage) -> InkMask {
    let (width, height) = image.dimensions();

    let luminances: Vec<f32> = image.pixels().map(luminance).collect();
    let threshold = ink_threshold(&luminances);

    let mut mask = GrayImage::new(width, height);
    for (cell, lum) in mask.pixels_mut().zip(&luminances) {
        if *lum < threshold {
            *cell = Luma([255]);
        }
    }

    tracing::debug!(width, height, threshold, "binarized working image");
    InkMask { mask, threshold }
}

/// Median-anchored threshold over a luminance sample.
///
/// Even-length samples use the upper median; the choice is fixed so repeated
/// runs binarize identically.
fn ink_threshold(luminances: &[f32]) -> f32 {
    if luminances.is_empty() {
        return MIN_INK_THRESHOLD;
    }

    let mut sorted = luminances.to_vec();
    sorted.sort_unstable_by(f32::total_cmp);
    let median = sorted[sorted.len() / 2];

    (median * MEDIAN_SCALE).clamp(MIN_INK_THRESHOLD, MAX_INK_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(&Rgb([255, 0, 0])), 0.299 * 255.0);
        assert_eq!(luminance(&Rgb([0, 255, 0])), 0.587 * 255.0);
        assert_eq!(luminance(&Rgb([0, 0, 255])), 0.114 * 255.0);
        assert_eq!(luminance(&Rgb([255, 255, 255])), 255.0);
    }

    #[test]
    fn test_threshold_clamps_on_white_pages() {
        // Median luminance 255 -> 229.5 before the upper clamp.
        let image = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let mask = binarize(&image);
        assert_eq!(mask.threshold(), MAX_INK_THRESHOLD);
    }

    #[test]
    fn test_threshold_clamps_on_black_pages() {
        let image = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        let mask = binarize(&image);
        assert_eq!(mask.threshold(), MIN_INK_THRESHOLD);
    }

    #[test]
    fn test_dark_strokes_classify_as_ink_on_white_page() {
        let mut image = RgbImage::from_pixel(10, 10, Rgb([240, 240, 240]));
        image.put_pixel(3, 4, Rgb([20, 20, 20]));
        let mask = binarize(&image);

        assert!(mask.is_ink(3, 4));
        assert!(!mask.is_ink(0, 0));
    }

    #[test]
    fn test_white_page_has_no_ink() {
        let image = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));
        let mask = binarize(&image);
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                assert!(!mask.is_ink(x, y));
            }
        }
    }

    #[test]
    fn test_empty_image_yields_empty_mask() {
        let image = RgbImage::new(0, 0);
        let mask = binarize(&image);
        assert!(mask.is_empty());
    }

    #[test]
    fn test_threshold_tracks_page_brightness() {
        // A uniformly mid-gray page: median 128 -> threshold 115.2, so pixels
        // at the page brightness itself are background, darker writing is ink.
        let mut image = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
        image.put_pixel(5, 5, Rgb([60, 60, 60]));
        let mask = binarize(&image);

        assert!((mask.threshold() - 128.0 * 0.9).abs() < 1e-3);
        assert!(mask.is_ink(5, 5));
        assert!(!mask.is_ink(1, 1));
    }
}
