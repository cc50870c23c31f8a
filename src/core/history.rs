//! # Command History
//!
//! Newest-first list of submitted commands, capped at [`MAX_HISTORY`].
//! Up/Down recall walks a cursor over it the way a shell does.

use std::collections::VecDeque;

/// Maximum number of remembered commands. Older entries are evicted.
pub const MAX_HISTORY: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    /// Index into `entries` while recalling; `None` means "not recalling".
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a command as the newest entry. Blank input is ignored.
    pub fn push(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        self.entries.push_front(command.to_string());
        self.entries.truncate(MAX_HISTORY);
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Up arrow: step to an older entry, clamping at the oldest.
    ///
    /// Returns the text the input field should show, or `None` when there is
    /// nothing to recall (the field is left alone).
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        let next = self.cursor.map_or(0, |c| (c + 1).min(last));
        self.cursor = Some(next);
        self.get(next)
    }

    /// Down arrow: step to a newer entry. Stepping past the newest clears
    /// the field (returns `""`) and leaves recall mode.
    pub fn newer(&mut self) -> &str {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1).map_or("", String::as_str)
            }
            _ => {
                self.cursor = None;
                ""
            }
        }
    }
}
