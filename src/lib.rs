//! rollscan — visual attendance-mark detection for photographed paper
//! registers.
//!
//! Given a photo of a register sheet and an ordered roster, the engine
//! returns one present/absent determination with a confidence score per
//! scoped person. The pipeline stages are:
//!
//! 1. **Normalize** – decode raw bytes, cap the working width.
//! 2. **Binarize** – weighted-RGB luminance, median-anchored global
//!    threshold, binary ink mask.
//! 3. **Segment** – vertical ink projection over the name column into row
//!    bands, with a uniform-slice fallback on noisy input.
//! 4. **Locate** – column ink projection over the right region to find the
//!    tick window.
//! 5. **Score** – per-row ink ratio and longest ink run inside the window,
//!    against a background-normalized adaptive threshold with a blob-size
//!    gate.
//! 6. **Map** – positional zip of row bands onto the scoped roster.
//!
//! Text recognition is an external, best-effort collaborator behind the
//! [`TextExtractor`] trait; its output is fuzzy-matched against the roster
//! and proposed for human confirmation, never asserted as presence. A
//! recognition failure leaves the pixel pipeline result untouched.
//!
//! # Public API
//!
//! - [`RollScan`] / [`RollScanBuilder`] as primary entry points
//! - [`ScanConfig`] for tuning, [`ScanError`] for failures
//! - [`ScanReport`], [`Detection`], [`OcrMatch`] as run output
//! - [`match_text`] as the standalone text matcher
//!
//! # Example
//!
//! ```no_run
//! use rollscan::{RollScan, RosterEntry};
//!
//! let engine = RollScan::builder().sensitivity(0.02).build()?;
//! let roster = vec![
//!     RosterEntry::new("17", "Alice Arnold", "year-7"),
//!     RosterEntry::new("18", "Bob Baker", "year-7"),
//! ];
//! let photo = std::fs::read("register.jpg")?;
//! let report = engine.classify(&photo, &roster, Some("year-7"))?;
//! for detection in &report.detections {
//!     println!("{}: {}", detection.person_name, detection.present);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod domain;
pub mod ocr;
pub mod processors;
pub mod rollscan;
pub mod utils;

pub use self::core::{ConfigError, ScanConfig, ScanError};
pub use domain::{OcrMatch, RosterEntry, filter_scope, match_text};
pub use ocr::{ExtractError, SharedTextExtractor, TextExtractor};
pub use rollscan::{Detection, RollScan, RollScanBuilder, ScanReport, ScanStats};
pub use utils::init_tracing;
