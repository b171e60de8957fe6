//! High-level scan API: the [`RollScan`] engine, its builder, and the report
//! types a run produces.

mod pipeline;
mod result;

pub use pipeline::{RollScan, RollScanBuilder};
pub use result::{Detection, ScanReport, ScanStats};
