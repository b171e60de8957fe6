//! Image loading and conversion helpers.

use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::core::ScanError;

/// Converts any decoded image into the RGB buffer the pipeline operates on.
pub fn dynamic_to_rgb(image: DynamicImage) -> RgbImage {
    image.to_rgb8()
}

/// Loads an image from disk, for callers feeding the engine from files.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage, ScanError> {
    let image = image::open(path).map_err(ScanError::ImageDecode)?;
    Ok(dynamic_to_rgb(image))
}
