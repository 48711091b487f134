//! Centralized error types
//!
//! All fallible plumbing (config loading, store access) is represented by the
//! `LogtapError` enum. Use `Result<T>` as shorthand for
//! `std::result::Result<T, LogtapError>`.
//!
//! Log-call operations never return errors: every failure on the hot path
//! degrades to suppression or omission instead (see the decision engine).

use std::fmt;
use std::path::PathBuf;

/// All logtap errors
#[derive(Debug)]
pub enum LogtapError {
    // === Config ===
    /// Failed to read or write the config file
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Store ===
    /// The shared state store could not be consulted or returned malformed data
    StoreUnavailable { reason: String },
}

impl std::error::Error for LogtapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LogtapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, .. } => write!(f, "Cannot read config: {}", path.display()),
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::StoreUnavailable { reason } => write!(f, "State store unavailable: {}", reason),
        }
    }
}

/// Alias for Result with LogtapError
pub type Result<T> = std::result::Result<T, LogtapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_store_unavailable() {
        let err = LogtapError::StoreUnavailable {
            reason: "poisoned".into(),
        };
        assert_eq!(err.to_string(), "State store unavailable: poisoned");
    }

    #[test]
    fn test_config_read_has_source() {
        use std::error::Error;
        let err = LogtapError::ConfigRead {
            path: PathBuf::from("logtap.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("logtap.toml"));
    }
}
