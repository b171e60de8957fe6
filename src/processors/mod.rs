//! Pixel-level stages of the scan pipeline.
//!
//! Data flows one way through this module: raw bytes become a bounded
//! working raster ([`raster`]), the raster becomes a binary ink mask
//! ([`ink`]), the mask yields row bands ([`rows`]) and a tick window
//! ([`tick`]), and each band×window intersection is scored for a mark
//! ([`score`]). All buffers are scoped to a single run.

pub mod ink;
pub mod raster;
pub mod rows;
pub mod score;
pub mod tick;

pub use ink::{InkMask, binarize, luminance};
pub use raster::{decode_register_image, shrink_to_width};
pub use rows::{RowBand, RowSegmentation, estimate_row_spacing, segment_rows};
pub use score::{RowScore, scan_band_height, score_row};
pub use tick::{TickWindow, locate_tick_window};
