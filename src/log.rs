//! The running narrative of a game, as shown to the player.

use alloc::string::String;
use alloc::vec::Vec;

/// Who produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// The human player.
    Human,
    /// An automated opponent.
    Bot,
    /// The game itself (end-of-game summary).
    System,
}

/// A single line in the action log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Who acted.
    pub actor: ActorKind,
    /// What happened.
    pub message: String,
}

/// Append-only list of log entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, actor: ActorKind, message: impl Into<String>) {
        self.entries.push(LogEntry {
            actor,
            message: message.into(),
        });
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a LogEntry;
    type IntoIter = core::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
