//! Tick column location: finding where check-marks live on the sheet.
//!
//! The check-mark column is visually the densest ink region on the right half
//! of a register sheet, so a single column-ink argmax suffices — no layout or
//! column-count configuration is required from the caller.

use crate::processors::ink::InkMask;

/// Fraction of the width where the tick search begins.
const SEARCH_START_FRACTION: f32 = 0.55;
/// Half-width of the tick window as a fraction of the image width.
const WINDOW_MARGIN_FRACTION: f32 = 0.06;
/// Minimum tick window width in pixels.
const MIN_WINDOW_WIDTH: u32 = 6;

/// The fixed-width window around the densest ink column. Bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickWindow {
    /// Leftmost column of the window.
    pub x0: u32,
    /// Rightmost column of the window (inclusive).
    pub x1: u32,
}

impl TickWindow {
    /// Window width in pixels.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }
}

/// Locates the tick window on a mask. Returns `None` only for an empty mask;
/// an inkless sheet still yields a deterministic window at the start of the
/// search region.
pub fn locate_tick_window(mask: &InkMask) -> Option<TickWindow> {
    if mask.is_empty() {
        return None;
    }

    let width = mask.width();
    let search_start = ((width as f32 * SEARCH_START_FRACTION) as u32).min(width - 1);

    // First maximum wins, so repeated runs pick the same column.
    let mut best_x = search_start;
    let mut best_ink = 0u32;
    for x in search_start..width {
        let ink = (0..mask.height()).filter(|&y| mask.is_ink(x, y)).count() as u32;
        if ink > best_ink {
            best_ink = ink;
            best_x = x;
        }
    }

    let margin = (width as f32 * WINDOW_MARGIN_FRACTION) as u32;
    let mut x0 = best_x.saturating_sub(margin);
    let mut x1 = (best_x + margin).min(width - 1);

    // Widen to the minimum width where the image allows it.
    while x1 - x0 + 1 < MIN_WINDOW_WIDTH {
        if x1 + 1 < width {
            x1 += 1;
        } else if x0 > 0 {
            x0 -= 1;
        } else {
            break;
        }
    }

    tracing::debug!(best_x, best_ink, x0, x1, "tick window located");
    Some(TickWindow { x0, x1 })
}
