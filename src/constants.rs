//! Application-wide constants
//!
//! Centralized defaults and environment variable names to avoid duplication.

// =============================================================================
// History
// =============================================================================

/// Default maximum number of entries retained in the history ring buffer
pub const DEFAULT_MAX_HISTORY: usize = 1000;

// =============================================================================
// Discovery notification
// =============================================================================

/// Capacity of the deferred store-notification queue
pub const NOTIFY_CHANNEL_CAPACITY: usize = 256;

/// Name of the background thread draining the notification queue
pub const NOTIFY_THREAD_NAME: &str = "logtap-discovery-notify";

// =============================================================================
// Environment overrides
// =============================================================================

/// Minimum level override; takes precedence over configuration unconditionally
pub const ENV_MIN_LEVEL: &str = "LOGTAP_MIN_LEVEL";

/// Global kill switch; takes precedence over everything unconditionally
pub const ENV_DISABLE_ALL: &str = "LOGTAP_DISABLE_ALL";

/// Comma-separated disabled-source list; fallback when no store is attached
pub const ENV_DISABLED_SOURCES: &str = "LOGTAP_DISABLED_SOURCES";

/// Opt-in to logging before a store is attached; fallback when no store is attached
pub const ENV_EARLY_LOGGING: &str = "LOGTAP_EARLY_LOGGING";

// =============================================================================
// Config file
// =============================================================================

/// Config file name, resolved next to the executable
pub const CONFIG_FILE_NAME: &str = "logtap.toml";
