//! Workspace groups.
//!
//! A group is identified by its label, but its hotkeys are derived from its
//! 1-based position in the group list: the third group is reached with the
//! `3` key no matter what it is called.

use serde::{Deserialize, Serialize};

/// Highest position that still maps to a single digit key.
pub const MAX_DIGIT_GROUPS: usize = 9;

/// A named workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Build one group per label, preserving order.
pub fn groups_from_labels<I, S>(labels: I) -> Vec<Group>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels.into_iter().map(|l| Group::new(l.as_ref())).collect()
}

/// Key symbol bound to the group at 0-based `index`.
///
/// Indices past [`MAX_DIGIT_GROUPS`] yield multi-character symbols such as
/// `"10"` which no single key press produces.
pub fn position_key(index: usize) -> String {
    (index + 1).to_string()
}
