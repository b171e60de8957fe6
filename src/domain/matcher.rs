//! Fuzzy matching of recognized text lines against the roster.
//!
//! This stage is independent of the pixel pipeline: it consumes whatever an
//! external text extractor produced and proposes roster matches for human
//! confirmation. It never asserts presence by itself — consuming code decides
//! whether an accepted match implies "present".

use serde::{Deserialize, Serialize};

use crate::domain::roster::RosterEntry;

/// A recognized text line paired with the roster entry it was matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrMatch {
    /// The trimmed recognized line.
    pub line: String,
    /// Identifier of the matched roster entry, if any.
    pub person_id: Option<String>,
    /// Name of the matched roster entry, if any.
    pub person_name: Option<String>,
}

impl OcrMatch {
    /// Returns true if this line was matched to a roster entry.
    pub fn is_matched(&self) -> bool {
        self.person_id.is_some()
    }
}

/// Matches recognized text lines against roster entries.
///
/// The text is split into trimmed non-empty lines. A line matches an entry
/// when, case-insensitively, the line contains the name, the name contains
/// the line, or the first whitespace-delimited tokens of both are equal. The
/// first satisfying entry in roster order wins; no tie-breaking is attempted
/// for genuinely ambiguous names (e.g. siblings sharing a surname).
/// Unmatched lines are still emitted so a review UI sees the full
/// recognized text.
pub fn match_text(text: &str, roster: &[RosterEntry]) -> Vec<OcrMatch> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let matched = roster.iter().find(|entry| line_matches(line, &entry.name));
            OcrMatch {
                line: line.to_owned(),
                person_id: matched.map(|e| e.id.clone()),
                person_name: matched.map(|e| e.name.clone()),
            }
        })
        .collect()
}

fn line_matches(line: &str, name: &str) -> bool {
    let line = line.to_lowercase();
    let name = name.to_lowercase();

    if line.contains(&name) || name.contains(&line) {
        return true;
    }

    match (first_token(&line), first_token(&name)) {
        (Some(l), Some(n)) => l == n,
        _ => false,
    }
}

fn first_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}
