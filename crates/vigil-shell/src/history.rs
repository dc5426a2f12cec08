//! Session history
//!
//! In-memory back/forward stack over resolved paths. Pushing while the
//! cursor sits behind the newest entry drops the forward arm, the same
//! way a browser does after navigating from a mid-history position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: String,
    pub visited_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit, truncating any forward entries
    pub fn push(&mut self, path: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push(HistoryEntry {
            path: path.to_string(),
            visited_at: Utc::now(),
        });
        self.cursor = self.entries.len() - 1;
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Move the cursor back one entry
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }

        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Move the cursor forward one entry
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }

        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
