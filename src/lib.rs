//! logtap - runtime log filtering with source discovery
//!
//! A client-side logging facility that tags each log line with an inferred
//! source, lets sources be enabled or disabled at runtime, and exposes the
//! on/off state through a shared application store consumed by a control
//! panel UI.
//!
//! The pipeline for each call: resolve a source label (bracket prefix or
//! call-site strategy), register it with the discovery tracker, consult the
//! decision engine against the shared store, and on approval record the
//! entry to the history ring and emit it to the output channel. Log calls
//! never panic and never return errors; any internal failure fails closed.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod panel;
pub mod store;

pub use config::{Config, FilterConfig, HistoryConfig};
pub use error::{LogtapError, Result};
pub use logging::{
    CallSiteStrategy, CaptureChannel, Channel, ConsoleChannel, DiscoveryTracker, HistoryBuffer,
    Level, LogChannel, LogEntry, Logger, NoCallSite, StaticCallSite,
};
pub use panel::{ControlPanel, FilterStats};
pub use store::{LoggingState, MemoryStore, StateStore, StoreAction};
