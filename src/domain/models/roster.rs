//! Participant name mapping, applied only at output time.
//!
//! The search works purely on indices; names exist so rendered output is
//! readable. Without a names file, participants are numbered from 1.

/// Display names for participants, indexed by participant index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Roster of `count` participants named `"1"` through `"count"`.
    pub fn numbered(count: usize) -> Self {
        Self {
            names: (1..=count).map(|n| n.to_string()).collect(),
        }
    }

    /// Roster backed by explicit names, one per participant index.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for a participant index, or `"?"` for an out-of-range index in
    /// a hand-edited session file.
    pub fn name(&self, index: usize) -> &str {
        self.names.get(index).map_or("?", String::as_str)
    }
}
