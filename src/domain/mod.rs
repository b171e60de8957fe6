//! Domain data for attendance scanning: roster entries, scope filtering, and
//! matching of externally recognized text against the roster.

pub mod matcher;
pub mod roster;

pub use matcher::{OcrMatch, match_text};
pub use roster::{RosterEntry, filter_scope};
