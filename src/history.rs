// history.rs

use std::fmt;

use crate::parser::Operation;
use crate::util::format_number;

/// One completed calculation. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryEntry {
    pub lhs: f64,
    pub op: Operation,
    pub rhs: f64,
    pub result: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.lhs),
            self.op,
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}

/// Session-scoped calculation history, insertion order = chronological order.
/// Owned by the REPL session; only successful arithmetic appends and `clear`
/// truncates.
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn record(&mut self, entry: HistoryEntry) {
        log::debug!("history += {}", entry);
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        log::debug!("history cleared ({} entries dropped)", self.entries.len());
        self.entries.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
