//! Activity log — an append-only record of what happened in the house.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub description: String,
}

/// Append-only log, stored oldest-first.
///
/// Growth is unbounded; there is no truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: Timestamp, description: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp,
            description: description.into(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in storage order, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Entries in display order, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
