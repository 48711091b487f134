//! Control surface for the log panel UI
//!
//! The panel renderer is an external collaborator; this module gives it the
//! read and write operations it needs over the shared store, the discovery
//! tracker, and the history buffer. Writes go through store actions, so any
//! logger attached to the same store observes them on its next call.

use crate::logging::{DiscoveryTracker, HistoryBuffer, LogEntry};
use crate::store::{LoggingState, StateStore, StoreAction};
use parking_lot::Mutex;
use std::sync::Arc;

/// Aggregate source statistics for the panel header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total_sources: usize,
    pub enabled: usize,
    pub disabled: usize,
    pub globally_disabled: bool,
}

/// Read/write operations consumed by the panel renderer
pub struct ControlPanel {
    store: Arc<dyn StateStore>,
    discovery: Arc<DiscoveryTracker>,
    history: Arc<Mutex<HistoryBuffer>>,
}

impl ControlPanel {
    pub fn new(
        store: Arc<dyn StateStore>,
        discovery: Arc<DiscoveryTracker>,
        history: Arc<Mutex<HistoryBuffer>>,
    ) -> Self {
        Self {
            store,
            discovery,
            history,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Store state, or the fail-closed view if the store cannot answer
    fn state(&self) -> LoggingState {
        match self.store.logging_state() {
            Ok(Some(state)) => state,
            Ok(None) | Err(_) => LoggingState::fail_closed(),
        }
    }

    pub fn disabled_sources(&self) -> Vec<String> {
        self.state().disabled_sources
    }

    pub fn is_globally_disabled(&self) -> bool {
        self.state().is_globally_disabled
    }

    pub fn is_source_disabled(&self, source: &str) -> bool {
        self.state().disabled_sources.iter().any(|s| s == source)
    }

    /// Discovered sources in first-seen order (the tracker is authoritative;
    /// the store's mirror may reorder its copy)
    pub fn discovered_sources(&self) -> Vec<String> {
        self.discovery.discovered()
    }

    pub fn stats(&self) -> FilterStats {
        let state = self.state();
        let discovered = self.discovery.discovered();
        let disabled = discovered
            .iter()
            .filter(|s| state.disabled_sources.contains(s))
            .count();
        FilterStats {
            total_sources: discovered.len(),
            enabled: discovered.len() - disabled,
            disabled,
            globally_disabled: state.is_globally_disabled,
        }
    }

    pub fn history(&self) -> Vec<LogEntry> {
        self.history.lock().snapshot()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub fn set_global_disabled(&self, disabled: bool) {
        self.store.dispatch(StoreAction::SetGlobalDisabled(disabled));
    }

    /// Flip the global flag, returning the new value
    pub fn toggle_global(&self) -> bool {
        let next = !self.is_globally_disabled();
        self.set_global_disabled(next);
        next
    }

    pub fn set_source_disabled(&self, source: &str, disabled: bool) {
        self.store.dispatch(StoreAction::SetSourceDisabled {
            source: source.to_string(),
            disabled,
        });
    }

    /// Flip one source's disabled flag, returning the new value
    pub fn toggle_source(&self, source: &str) -> bool {
        let next = !self.is_source_disabled(source);
        self.set_source_disabled(source, next);
        next
    }

    /// Replace the disabled list wholesale
    pub fn set_disabled_sources(&self, sources: Vec<String>) {
        self.store.dispatch(StoreAction::SetDisabledSources(sources));
    }

    pub fn enable_all(&self) {
        self.store.dispatch(StoreAction::SetDisabledSources(Vec::new()));
    }

    /// Disable every currently discovered source.
    ///
    /// Uses the tracker's list rather than the store mirror, so sources
    /// whose deferred notification has not landed yet are still covered.
    pub fn disable_all(&self) {
        self.store
            .dispatch(StoreAction::SetDisabledSources(self.discovery.discovered()));
    }

    /// Clear the disabled list and un-disable globally; discoveries persist
    pub fn reset(&self) {
        self.store.dispatch(StoreAction::Reset);
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use crate::logging::{CaptureChannel, Logger};
    use crate::store::MemoryStore;

    fn panel_with_logger() -> (ControlPanel, Logger, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let discovery = Arc::new(DiscoveryTracker::new());
        let logger = Logger::new(FilterConfig::default(), discovery.clone())
            .with_store(store.clone())
            .with_channel(Box::new(Arc::new(CaptureChannel::new())));
        let panel = ControlPanel::new(store.clone(), discovery, logger.history_handle());
        (panel, logger, store)
    }

    #[test]
    fn test_toggle_source_round_trip() {
        let (panel, logger, _) = panel_with_logger();
        logger.info("[Net] up");

        assert!(panel.toggle_source("Net"));
        assert!(panel.is_source_disabled("Net"));
        logger.info("[Net] muted");
        assert_eq!(panel.history().len(), 1);

        assert!(!panel.toggle_source("Net"));
        logger.info("[Net] back");
        assert_eq!(panel.history().len(), 2);
    }

    #[test]
    fn test_global_toggle_suppresses_everything() {
        let (panel, logger, _) = panel_with_logger();

        assert!(panel.toggle_global());
        logger.fatal("[Boot] lost");
        logger.error("plain");
        assert!(panel.history().is_empty());

        assert!(!panel.toggle_global());
        logger.error("[Boot] back");
        assert_eq!(panel.history().len(), 1);
    }

    #[test]
    fn test_stats_track_disabled_counts() {
        let (panel, logger, _) = panel_with_logger();
        logger.info("[A] x");
        logger.info("[B] x");
        logger.info("[C] x");

        panel.set_source_disabled("B", true);
        let stats = panel.stats();
        assert_eq!(stats.total_sources, 3);
        assert_eq!(stats.enabled, 2);
        assert_eq!(stats.disabled, 1);
        assert!(!stats.globally_disabled);
    }

    #[test]
    fn test_disable_all_covers_every_discovered_source() {
        let (panel, logger, _) = panel_with_logger();
        logger.info("[A] x");
        logger.info("[B] x");

        panel.disable_all();
        let mut disabled = panel.disabled_sources();
        disabled.sort();
        assert_eq!(disabled, vec!["A", "B"]);

        panel.enable_all();
        assert!(panel.disabled_sources().is_empty());
    }

    #[test]
    fn test_reset_preserves_discoveries() {
        let (panel, logger, _) = panel_with_logger();
        logger.info("[A] x");
        panel.disable_all();
        panel.set_global_disabled(true);

        panel.reset();
        assert!(!panel.is_globally_disabled());
        assert!(panel.disabled_sources().is_empty());
        assert_eq!(panel.discovered_sources(), vec!["A"]);
    }

    #[test]
    fn test_clear_history_leaves_config_and_discovery() {
        let (panel, logger, _) = panel_with_logger();
        logger.info("[A] x");
        panel.set_source_disabled("A", true);

        panel.clear_history();
        assert!(panel.history().is_empty());
        assert_eq!(panel.discovered_sources(), vec!["A"]);
        assert!(panel.is_source_disabled("A"));
    }

    #[test]
    fn test_reads_fail_closed_on_broken_store() {
        let store: Arc<dyn StateStore> = Arc::new(crate::store::FailingStore);
        let discovery = Arc::new(DiscoveryTracker::new());
        let history = Arc::new(Mutex::new(HistoryBuffer::new(8)));
        let panel = ControlPanel::new(store, discovery, history);

        assert!(panel.is_globally_disabled());
        assert!(panel.disabled_sources().is_empty());
        assert!(panel.stats().globally_disabled);
    }
}
