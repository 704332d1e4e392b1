//! Recall history of committed literals
//!
//! Every literal successfully pushed is appended verbatim. The cursor counts
//! back from the newest entry: offset `0` is the most recent literal, `len - 1`
//! the oldest. A commit resets navigation, so the next recall starts again at
//! the newest entry.

/// Append-only log of literal text with a recall cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// `None` until the first recall after a commit
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Record a committed literal and reset the cursor
    pub fn record(&mut self, literal: &str) {
        self.entries.push(literal.to_string());
        self.cursor = None;
    }

    /// Step toward older entries and return the entry under the cursor.
    ///
    /// The first recall after a commit lands on the newest entry; the cursor
    /// then stops at the oldest one.
    pub fn recall_older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let offset = match self.cursor {
            None => 0,
            Some(offset) => (offset + 1).min(last),
        };
        self.cursor = Some(offset);
        self.entry(offset)
    }

    /// Step toward newer entries and return the entry under the cursor.
    ///
    /// The cursor stops at the newest entry, so outside a recall this
    /// returns the newest entry.
    pub fn recall_newer(&mut self) -> Option<&str> {
        self.entries.len().checked_sub(1)?;
        let offset = self.cursor.map_or(0, |offset| offset.saturating_sub(1));
        self.cursor = Some(offset);
        self.entry(offset)
    }

    /// Current cursor position (0 when not navigating)
    pub fn offset(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, offset: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(offset + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
