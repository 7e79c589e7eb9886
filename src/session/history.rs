//! Query history: bounded, newest first
//!
//! Records every submission attempt. Entries carry no outcome.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Default number of entries kept
pub const HISTORY_CAPACITY: usize = 5;

/// A submitted query
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub text: String,
    pub issued_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn formatted_time(&self) -> String {
        self.issued_at.format("%H:%M:%S").to_string()
    }
}

/// Bounded log of submitted query texts
#[derive(Debug)]
pub struct QueryHistory {
    /// Front is newest
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl QueryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a submission, evicting the oldest entry past capacity
    pub fn record(&mut self, text: &str) {
        self.record_at(text, Local::now());
    }

    pub fn record_at(&mut self, text: &str, issued_at: DateTime<Local>) {
        self.entries.push_front(HistoryEntry {
            text: text.to_string(),
            issued_at,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(history: &QueryHistory) -> Vec<&str> {
        history.entries().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut history = QueryHistory::default();
        history.record("first");
        history.record("second");
        assert_eq!(texts(&history), vec!["second", "first"]);
    }

    #[test]
    fn test_sixth_entry_evicts_first() {
        let mut history = QueryHistory::default();
        for i in 1..=6 {
            history.record(&format!("q{}", i));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(texts(&history), vec!["q6", "q5", "q4", "q3", "q2"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = QueryHistory::default();
        history.record("same");
        history.record("same");
        assert_eq!(history.len(), 2);
    }
}
