//! Shared state store contract
//!
//! The logging engine reads filter state from an external application store
//! and writes discovered sources back into it. The store itself belongs to
//! the host application; this module defines the contract plus an in-memory
//! reference implementation used by the demo binary and tests.

use crate::error::{LogtapError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Logging slice of the shared application state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingState {
    pub is_globally_disabled: bool,
    pub disabled_sources: Vec<String>,
    pub discovered_sources: Vec<String>,
}

impl LoggingState {
    /// State assumed when the logging slice is absent or unreadable:
    /// globally disabled, nothing discovered
    pub fn fail_closed() -> Self {
        Self {
            is_globally_disabled: true,
            disabled_sources: Vec::new(),
            discovered_sources: Vec::new(),
        }
    }

    /// State of a freshly attached store: enabled, nothing discovered
    pub fn enabled() -> Self {
        Self {
            is_globally_disabled: false,
            disabled_sources: Vec::new(),
            discovered_sources: Vec::new(),
        }
    }
}

/// Updates dispatched into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// A source label was observed for the first time
    SourceDiscovered(String),
    SetGlobalDisabled(bool),
    SetSourceDisabled { source: String, disabled: bool },
    /// Replace the disabled-sources list wholesale
    SetDisabledSources(Vec<String>),
    /// Clear the disabled list and un-disable globally, keeping discoveries
    Reset,
}

/// Contract the engine consumes.
///
/// `logging_state` returns `Ok(None)` when the store exists but carries no
/// logging slice yet; the engine treats that, and any `Err`, as
/// fail-closed. `dispatch` is best-effort and must not panic.
pub trait StateStore: Send + Sync {
    fn logging_state(&self) -> Result<Option<LoggingState>>;
    fn dispatch(&self, action: StoreAction);
}

/// In-memory reference store.
///
/// Keeps its mirrored `discovered_sources` sorted. The contract allows the
/// store to reorder its copy; first-seen order lives in the discovery
/// tracker, and keeping the two visibly different stops callers from
/// depending on store order.
pub struct MemoryStore {
    state: RwLock<LoggingState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoggingState::enabled()),
        }
    }

    pub fn with_state(state: LoggingState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn logging_state(&self) -> Result<Option<LoggingState>> {
        Ok(Some(self.state.read().clone()))
    }

    fn dispatch(&self, action: StoreAction) {
        let mut state = self.state.write();
        match action {
            StoreAction::SourceDiscovered(source) => {
                if !state.discovered_sources.contains(&source) {
                    state.discovered_sources.push(source);
                    state.discovered_sources.sort();
                }
            }
            StoreAction::SetGlobalDisabled(disabled) => {
                state.is_globally_disabled = disabled;
            }
            StoreAction::SetSourceDisabled { source, disabled } => {
                if disabled {
                    if !state.disabled_sources.contains(&source) {
                        state.disabled_sources.push(source);
                    }
                } else {
                    state.disabled_sources.retain(|s| s != &source);
                }
            }
            StoreAction::SetDisabledSources(sources) => {
                state.disabled_sources = sources;
            }
            StoreAction::Reset => {
                state.disabled_sources.clear();
                state.is_globally_disabled = false;
            }
        }
    }
}

/// Store double that always fails, for exercising fail-closed paths
pub struct FailingStore;

impl StateStore for FailingStore {
    fn logging_state(&self) -> Result<Option<LoggingState>> {
        Err(LogtapError::StoreUnavailable {
            reason: "simulated failure".into(),
        })
    }

    fn dispatch(&self, _action: StoreAction) {}
}
