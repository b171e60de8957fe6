//! Image normalization: decoding raw bytes into a bounded working raster.
//!
//! Photographed registers arrive at arbitrary resolutions; everything
//! downstream operates on a working copy whose width is capped so that
//! projection and scoring costs stay flat. The decoded buffer is owned by the
//! single run that produced it and dropped afterwards.

use std::borrow::Cow;

use image::RgbImage;
use image::imageops::FilterType;

use crate::core::ScanError;

/// Decodes raw image bytes and bounds the working width.
///
/// Wider images are uniformly downscaled so that `width <= max_width`, with
/// the height scaled by the same factor. Fails with [`ScanError::ImageDecode`]
/// when the bytes are not a decodable image.
pub fn decode_register_image(bytes: &[u8], max_width: u32) -> Result<RgbImage, ScanError> {
    let decoded = image::load_from_memory(bytes).map_err(ScanError::ImageDecode)?;
    let rgb = decoded.to_rgb8();

    Ok(match shrink_to_width(&rgb, max_width) {
        Cow::Owned(resized) => resized,
        Cow::Borrowed(_) => rgb,
    })
}

/// Downscales `image` to at most `max_width` pixels wide, preserving aspect
/// ratio. Returns the input untouched when it is already within bounds.
pub fn shrink_to_width(image: &RgbImage, max_width: u32) -> Cow<'_, RgbImage> {
    let width = image.width();
    if width <= max_width {
        return Cow::Borrowed(image);
    }

    let scale = max_width as f32 / width as f32;
    let height = ((image.height() as f32 * scale).round() as u32).max(1);
    tracing::debug!(
        from_width = width,
        from_height = image.height(),
        to_width = max_width,
        to_height = height,
        "downscaling working image"
    );
    Cow::Owned(image::imageops::resize(
        image,
        max_width,
        height,
        FilterType::Triangle,
    ))
}
