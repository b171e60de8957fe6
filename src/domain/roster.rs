//! Roster entries and scope filtering.
//!
//! The roster is supplied by an external collaborator and is strictly
//! read-only here: the engine never creates, deletes or persists entries, and
//! scope filtering preserves the collaborator's list order. That order is
//! load-bearing — the pixel pipeline maps row bands to scope entries
//! positionally.

use serde::{Deserialize, Serialize};

/// One person on the attendance register, as supplied by the roster provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Collaborator-assigned identifier, opaque to the engine.
    pub id: String,
    /// Display name as written on the register sheet.
    pub name: String,
    /// Group key used for scope filtering (class, squad, team, ...).
    pub group: String,
}

impl RosterEntry {
    /// Convenience constructor, mainly for tests and examples.
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Filters the roster down to the requested group, preserving roster order.
///
/// With `group = None` the full roster is returned. Matching is exact and
/// case-sensitive; callers are advised (not forced) to always scope by group,
/// since the positional row mapping breaks down across mixed groups.
pub fn filter_scope<'a>(roster: &'a [RosterEntry], group: Option<&str>) -> Vec<&'a RosterEntry> {
    match group {
        Some(key) => roster.iter().filter(|entry| entry.group == key).collect(),
        None => roster.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("1", "Alice Arnold", "year-7"),
            RosterEntry::new("2", "Bob Baker", "year-8"),
            RosterEntry::new("3", "Carol Clark", "year-7"),
        ]
    }

    #[test]
    fn test_filter_scope_keeps_roster_order() {
        let roster = roster();
        let scoped = filter_scope(&roster, Some("year-7"));
        let names: Vec<_> = scoped.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alice Arnold", "Carol Clark"]);
    }

    #[test]
    fn test_no_filter_returns_everyone() {
        let roster = roster();
        assert_eq!(filter_scope(&roster, None).len(), 3);
    }

    #[test]
    fn test_group_match_is_exact() {
        let roster = roster();
        assert!(filter_scope(&roster, Some("Year-7")).is_empty());
        assert!(filter_scope(&roster, Some("year")).is_empty());
    }
}
