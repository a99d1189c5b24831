//! # History Log
//!
//! Append-only audit trail of human-readable operation events.
//!
//! No deletion, no reordering, no deduplication: the log reads back in
//! exactly the order the operations happened.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TIMESTAMP_FORMAT;

/// A single audit entry: timestamp plus freeform description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format(TIMESTAMP_FORMAT), self.text)
    }
}

/// The append-only log itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamps and appends a description.
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push(HistoryEntry {
            at: Local::now(),
            text: text.into(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());

        log.append("operator session opened");
        log.append("sale ID 1 registered");
        log.append("refund ID 1");

        let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["operator session opened", "sale ID 1 registered", "refund ID 1"]
        );
    }

    #[test]
    fn test_entry_display_format() {
        let entry = HistoryEntry {
            at: Local::now(),
            text: "cash register closed".into(),
        };
        let rendered = entry.to_string();
        // "[YYYY-MM-DD HH:MM:SS] text"
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("] cash register closed"));
        assert_eq!(rendered.find(']'), Some(20));
    }
}
