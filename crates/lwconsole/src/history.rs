//! Append-only command history with a traversal cursor.
//!
//! The cursor is only used by interactive recall (Up/Down). It lives in
//! `0..=len`, where `len` means "one past the last entry"; every `add`
//! resets it there, invalidating any in-flight traversal.

/// How many entries are handed to the config store for persistence.
pub const PERSISTED_ENTRIES: usize = 20;

#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed history from previously persisted entries. The cursor starts
    /// one past the last entry.
    pub fn from_entries(entries: Vec<String>) -> Self {
        let cursor = entries.len();
        Self { entries, cursor }
    }

    /// Append an entry and reset the cursor to one past the last entry.
    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    /// Step toward older entries. At the oldest boundary, returns `None`
    /// and the cursor does not move.
    pub fn prev(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step toward newer entries. At the one-past-last boundary, returns
    /// `None` and the cursor does not move.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Entry at `index` (0-based), `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent [`PERSISTED_ENTRIES`] entries, oldest first.
    pub fn recent(&self) -> &[String] {
        let start = self.entries.len().saturating_sub(PERSISTED_ENTRIES);
        &self.entries[start..]
    }
}
