//! In-memory session history of generated passwords.

use std::fmt;

use chrono::{DateTime, Local};
use zeroize::Zeroize;

use crate::pass::Strength;

/// One generated password with the metadata shown to the user.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub password: String,
    pub bits: f64,
    pub strength: Strength,
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | Entropy: {:.2} bits | Strength: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.password,
            self.bits,
            self.strength
        )
    }
}

/// Append-only history owned by one interactive session. Not persisted
/// across restarts; cleared only on explicit request.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, password: String, bits: f64, strength: Strength) {
        self.entries.push(HistoryEntry {
            password,
            bits,
            strength,
            timestamp: Local::now(),
        });
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the history, wiping the stored password strings first.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.password.zeroize();
        }
        self.entries.clear();
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_list_preserves_order() {
        let mut history = History::new();
        history.record("first".into(), 30.0, Strength::Weak);
        history.record("second".into(), 70.0, Strength::Strong);
        history.record("third".into(), 130.0, Strength::VeryStrong);

        let entries = history.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].password, "first");
        assert_eq!(entries[1].password, "second");
        assert_eq!(entries[2].password, "third");
        assert_eq!(entries[1].strength, Strength::Strong);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::new();
        history.record("same".into(), 30.0, Strength::Weak);
        history.record("same".into(), 30.0, Strength::Weak);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_empties_the_sequence() {
        let mut history = History::new();
        history.record("secret".into(), 60.0, Strength::Strong);
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());

        // Usable again after clearing.
        history.record("after".into(), 60.0, Strength::Strong);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn entry_display_format() {
        let entry = HistoryEntry {
            password: "Abc123!x".into(),
            bits: 51.68,
            strength: Strength::Medium,
            timestamp: Local::now(),
        };
        let rendered = entry.to_string();
        assert!(rendered.starts_with('['));
        assert!(rendered.contains("Abc123!x | Entropy: 51.68 bits | Strength: Medium"));
    }
}
