//! Emit/suppress decisions
//!
//! Combines global-disable state, the level threshold, and per-source
//! disable state into a single `should_emit` check. Every rule fails
//! closed: a store that cannot be consulted suppresses output rather than
//! surfacing an error, and no path through here panics.

use super::Level;
use crate::constants::{ENV_DISABLED_SOURCES, ENV_DISABLE_ALL, ENV_EARLY_LOGGING, ENV_MIN_LEVEL};
use crate::store::{LoggingState, StateStore};
use std::collections::HashSet;
use std::sync::Arc;

/// Decides whether a log call is emitted.
///
/// Holds the logger-side configuration; shared state is read from the
/// attached store on every call, so external toggles are observed with no
/// staleness beyond one call. Environment overrides are likewise read per
/// decision, never cached.
pub struct DecisionEngine {
    min_level: Level,
    /// Seed disabled set from configuration, independent of the store
    seed_disabled: HashSet<String>,
    /// Opt-in to logging before a store is attached
    early_logging: bool,
    store: Option<Arc<dyn StateStore>>,
}

impl DecisionEngine {
    pub fn new(
        min_level: Level,
        seed_disabled: impl IntoIterator<Item = String>,
        early_logging: bool,
        store: Option<Arc<dyn StateStore>>,
    ) -> Self {
        Self {
            min_level,
            seed_disabled: seed_disabled.into_iter().collect(),
            early_logging,
            store,
        }
    }

    /// Apply the suppression rules in strict order, short-circuiting at the
    /// first suppressing condition:
    ///
    /// 1. global disable (kill-switch override, store flag, or the
    ///    fail-closed no-store default without an early-logging opt-in)
    /// 2. level below the minimum threshold
    /// 3. resolved source is an exact member of the disabled set
    ///
    /// An absent source is never suppressed by rule 3.
    pub fn should_emit(&self, level: Level, source: Option<&str>) -> bool {
        // Kill switch wins over everything, store or not
        if env_flag(ENV_DISABLE_ALL) {
            return false;
        }

        // One store read per call; Err or a missing logging slice both
        // collapse to fail-closed suppression
        let state: Option<LoggingState> = match &self.store {
            Some(store) => match store.logging_state() {
                Ok(Some(state)) => Some(state),
                Ok(None) | Err(_) => return false,
            },
            None => None,
        };

        match &state {
            Some(state) => {
                if state.is_globally_disabled {
                    return false;
                }
            }
            None => {
                if !self.early_logging && !env_flag(ENV_EARLY_LOGGING) {
                    return false;
                }
            }
        }

        let min = env_min_level().unwrap_or(self.min_level);
        if level < min {
            return false;
        }

        if let Some(source) = source {
            if self.seed_disabled.contains(source) {
                return false;
            }
            match &state {
                Some(state) => {
                    if state.disabled_sources.iter().any(|s| s == source) {
                        return false;
                    }
                }
                None => {
                    // Environment list is a fallback for store-less operation
                    if env_disabled_sources().iter().any(|s| s == source) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// Read a boolean environment toggle ("1", "true", "yes", "on")
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Minimum level override, if set and recognizable
fn env_min_level() -> Option<Level> {
    std::env::var(ENV_MIN_LEVEL).ok()?.parse().ok()
}

/// Comma-separated disabled-source fallback list
fn env_disabled_sources() -> Vec<String> {
    std::env::var(ENV_DISABLED_SOURCES)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
