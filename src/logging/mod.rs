//! Filtering and source-discovery engine
//!
//! Centralizes the logging pipeline:
//! - `Level` / `LogEntry` - Severity ordering and the entry record
//! - `extract` - Source label extraction (bracket prefix, call-site strategy)
//! - `DecisionEngine` - Emit/suppress rules against the shared store
//! - `DiscoveryTracker` - First-seen source bookkeeping with deferred
//!   store notification
//! - `HistoryBuffer` - Bounded in-memory ring of emitted entries
//! - `EmissionSink` - Formatting and channel routing
//! - `Logger` - The facade tying the pipeline together

pub mod decision;
pub mod discovery;
pub mod entry;
pub mod extract;
pub mod history;
pub mod level;
pub mod logger;
pub mod sink;

pub use decision::DecisionEngine;
pub use discovery::DiscoveryTracker;
pub use entry::LogEntry;
pub use extract::{CallSiteStrategy, NoCallSite, StaticCallSite};
pub use history::HistoryBuffer;
pub use level::Level;
pub use logger::Logger;
pub use sink::{CaptureChannel, Channel, ConsoleChannel, EmissionSink, LogChannel};

/// Initialize internal tracing for the crate's own diagnostics
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true for debug-level output.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}
