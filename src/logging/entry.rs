//! Log entry types
//!
//! Core record for a single emitted log line. Entries are created at
//! emission time and never mutated afterwards; once recorded, the history
//! buffer is their sole owner.

use super::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An immutable log entry
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Capture time (UTC)
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Resolved source label, if extraction succeeded
    pub source: Option<String>,
    /// Message text after formatting (bracket prefixes are kept intact)
    pub message: String,
    /// Positional extra arguments, opaque and order-preserving
    pub extras: Vec<serde_json::Value>,
}

impl LogEntry {
    pub fn new(
        level: Level,
        source: Option<String>,
        message: impl Into<String>,
        extras: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            source,
            message: message.into(),
            extras,
        }
    }

    /// Entry without source or extras, the common case in tests
    pub fn bare(level: Level, message: impl Into<String>) -> Self {
        Self::new(level, None, message, Vec::new())
    }

    /// Entry with a resolved source and no extras
    pub fn sourced(level: Level, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(level, Some(source.into()), message, Vec::new())
    }
}
