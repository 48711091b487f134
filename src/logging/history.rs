//! History ring buffer
//!
//! Retains the most recent emitted entries in memory for inspection.
//! Pure data structure with no I/O side effects.

use super::LogEntry;
use std::collections::VecDeque;

/// Bounded FIFO buffer of emitted log entries.
///
/// Length never exceeds the configured maximum; when an append would
/// overflow, the oldest entries are discarded in one bulk trim.
pub struct HistoryBuffer {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl HistoryBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    /// Append an entry, trimming the oldest entries if over capacity
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        let excess = self.entries.len().saturating_sub(self.max_entries);
        if excess > 0 {
            self.entries.drain(..excess);
        }
    }

    /// Defensive copy of the current contents, oldest first.
    ///
    /// Callers cannot mutate internal state through the returned value.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Empty the buffer. Discovery state and configuration are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
