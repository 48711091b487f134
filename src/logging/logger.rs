//! Logger facade
//!
//! One method per severity level, all forwarding into a single pipeline:
//! resolve source → register it → consult the decision engine → on
//! approval, record to history and emit. Log calls never panic and never
//! return errors; every internal failure degrades to suppression or
//! omission.

use super::decision::DecisionEngine;
use super::discovery::DiscoveryTracker;
use super::extract::{self, CallSiteStrategy, NoCallSite};
use super::history::HistoryBuffer;
use super::sink::{ConsoleChannel, EmissionSink, Formatter, LogChannel};
use super::{Level, LogEntry};
use crate::config::FilterConfig;
use crate::constants::DEFAULT_MAX_HISTORY;
use crate::store::StateStore;
use parking_lot::Mutex;
use std::sync::Arc;

/// A logging facade with independent configuration.
///
/// Multiple loggers may coexist, each wired to its own store and channel
/// while sharing one `DiscoveryTracker` (discovery is process-wide, not
/// per-instance).
pub struct Logger {
    config: FilterConfig,
    engine: DecisionEngine,
    call_site: Box<dyn CallSiteStrategy>,
    discovery: Arc<DiscoveryTracker>,
    history: Arc<Mutex<HistoryBuffer>>,
    sink: EmissionSink,
}

impl Logger {
    /// Logger with console output, default history capacity, no store
    /// attached, and call-site detection disabled
    pub fn new(config: FilterConfig, discovery: Arc<DiscoveryTracker>) -> Self {
        let engine = Self::build_engine(&config, None);
        let sink = EmissionSink::new(Box::new(ConsoleChannel), config.include_timestamp);
        Self {
            config,
            engine,
            call_site: Box::new(NoCallSite),
            discovery,
            history: Arc::new(Mutex::new(HistoryBuffer::new(DEFAULT_MAX_HISTORY))),
            sink,
        }
    }

    fn build_engine(config: &FilterConfig, store: Option<Arc<dyn StateStore>>) -> DecisionEngine {
        DecisionEngine::new(
            config.min_level,
            config.disabled_sources.iter().cloned(),
            config.early_logging,
            store,
        )
    }

    /// Attach a shared state store; decisions read it on every call
    pub fn with_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.engine = Self::build_engine(&self.config, Some(store));
        self
    }

    /// Replace the call-site detection strategy
    pub fn with_call_site(mut self, strategy: Box<dyn CallSiteStrategy>) -> Self {
        self.call_site = strategy;
        self
    }

    /// Redirect emission to a different channel.
    ///
    /// Replaces the sink, so set the channel before any formatter.
    pub fn with_channel(mut self, channel: Box<dyn LogChannel>) -> Self {
        self.sink = EmissionSink::new(channel, self.config.include_timestamp);
        self
    }

    /// Override the default line format
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.sink.set_formatter(formatter);
        self
    }

    /// Change the history capacity (replaces the buffer)
    pub fn with_max_history(mut self, max_entries: usize) -> Self {
        self.history = Arc::new(Mutex::new(HistoryBuffer::new(max_entries)));
        self
    }

    // =========================================================================
    // Per-level operations
    // =========================================================================

    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message, Vec::new());
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message, Vec::new());
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message, Vec::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message, Vec::new());
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message, Vec::new());
    }

    pub fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message, Vec::new());
    }

    /// Full pipeline entry point, with positional extra arguments.
    ///
    /// Registration precedes the emit decision: a source counts as
    /// discovered even when its entry is suppressed, because discovery
    /// answers "has this ever tried to log", not "was it shown".
    pub fn log(&self, level: Level, message: &str, extras: Vec<serde_json::Value>) {
        let (source, formatted) = self.resolve_source(message);

        if let Some(source) = &source {
            self.discovery.register(source);
        }

        if !self.engine.should_emit(level, source.as_deref()) {
            return;
        }

        let entry = LogEntry::new(level, source, formatted, extras);
        self.history.lock().record(entry.clone());
        self.sink.emit(&entry);
    }

    /// Bracket extraction first; the prefix stays part of the message.
    /// Call-site detection is the fallback, and only then is the message
    /// rewritten to carry the label (when `include_source` is set).
    fn resolve_source(&self, message: &str) -> (Option<String>, String) {
        if let Some(token) = extract::extract_source(message) {
            return (Some(token.to_string()), message.to_string());
        }
        match self.call_site.detect() {
            Some(label) => {
                let formatted = if self.config.include_source {
                    extract::prefix_source(&label, message)
                } else {
                    message.to_string()
                };
                (Some(label), formatted)
            }
            None => (None, message.to_string()),
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn history(&self) -> Vec<LogEntry> {
        self.history.lock().snapshot()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    /// Shared handle to the history buffer, for the control surface
    pub fn history_handle(&self) -> Arc<Mutex<HistoryBuffer>> {
        self.history.clone()
    }

    pub fn discovery(&self) -> &Arc<DiscoveryTracker> {
        &self.discovery
    }
}
