//! Source discovery tracking
//!
//! Records every distinct source label ever seen, exactly once, and
//! publishes new discoveries to the shared state store through a deferred,
//! fire-and-forget queue. The tracker is an explicit shared object passed
//! to each logger at construction, so tests can isolate instances and
//! reset state between cases.

use crate::constants::{NOTIFY_CHANNEL_CAPACITY, NOTIFY_THREAD_NAME};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::mpsc::{sync_channel, SyncSender};
use std::thread;

/// Callback invoked off-thread with each newly discovered source label
pub type Notifier = Box<dyn Fn(String) + Send + Sync>;

#[derive(Default)]
struct SeenSet {
    /// First-seen order, for `discovered()`
    order: Vec<String>,
    /// Membership index guaranteeing uniqueness
    index: HashSet<String>,
}

/// Process-wide set of sources that have ever tried to log.
///
/// Local registration is synchronous and immediately visible to readers;
/// the notifier runs on a dedicated thread with at-most-once, best-effort,
/// unordered delivery. A saturated queue drops the notification rather
/// than blocking the log call.
pub struct DiscoveryTracker {
    seen: Mutex<SeenSet>,
    notify_tx: Option<SyncSender<String>>,
}

impl DiscoveryTracker {
    /// Tracker without store notification
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(SeenSet::default()),
            notify_tx: None,
        }
    }

    /// Tracker that forwards each new discovery to `notifier` on a
    /// background thread.
    ///
    /// The notifier is injected here instead of the tracker reaching for
    /// its consumer; wire it to `store.dispatch(SourceDiscovered)` at the
    /// composition root.
    pub fn with_notifier(notifier: Notifier) -> Self {
        let (tx, rx) = sync_channel::<String>(NOTIFY_CHANNEL_CAPACITY);

        // Thread exits when the last sender is dropped
        let _ = thread::Builder::new()
            .name(NOTIFY_THREAD_NAME.to_string())
            .spawn(move || {
                for source in rx {
                    notifier(source);
                }
            });

        Self {
            seen: Mutex::new(SeenSet::default()),
            notify_tx: Some(tx),
        }
    }

    /// Record a source if not already present. Returns true on first sight.
    ///
    /// Idempotent; the notification side effect fires only for genuinely
    /// new labels and its outcome never affects the caller.
    pub fn register(&self, source: &str) -> bool {
        let newly_seen = {
            let mut seen = self.seen.lock();
            if seen.index.contains(source) {
                false
            } else {
                seen.index.insert(source.to_string());
                seen.order.push(source.to_string());
                true
            }
        };

        if newly_seen {
            if let Some(tx) = &self.notify_tx {
                // Fire and forget: a full queue or detached receiver is not
                // the log call's problem
                let _ = tx.try_send(source.to_string());
            }
        }

        newly_seen
    }

    /// All sources registered so far, in first-seen order.
    ///
    /// Snapshot semantics: later registrations do not alter the returned
    /// value.
    pub fn discovered(&self) -> Vec<String> {
        self.seen.lock().order.clone()
    }

    pub fn contains(&self, source: &str) -> bool {
        self.seen.lock().index.contains(source)
    }

    pub fn len(&self) -> usize {
        self.seen.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().order.is_empty()
    }

    /// Forget everything. Intended for test teardown.
    pub fn reset(&self) {
        let mut seen = self.seen.lock();
        seen.order.clear();
        seen.index.clear();
    }
}

impl Default for DiscoveryTracker {
    fn default() -> Self {
        Self::new()
    }
}
