//! Shared helpers: image loading/conversion and logging setup.

pub mod image;
pub mod logging;

pub use image::{dynamic_to_rgb, load_image};
pub use logging::init_tracing;
