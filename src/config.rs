//! Configuration management
//!
//! Config file is stored next to the executable as `logtap.toml`.
//! Any load failure (missing file, parse error) falls back to defaults
//! with a warning; configuration never stops the host from starting.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_MAX_HISTORY};
use crate::error::{LogtapError, Result};
use crate::logging::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub filter: FilterConfig,
    pub history: HistoryConfig,
}

/// Logger-side filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum level that may be emitted
    pub min_level: Level,
    /// Seed disabled-source list, applied independently of the store
    pub disabled_sources: Vec<String>,
    /// Prefix emitted lines with an RFC 3339 timestamp
    pub include_timestamp: bool,
    /// Rewrite call-site-detected messages to carry their `[Source]` prefix
    pub include_source: bool,
    /// Allow emission before a store is attached (default: fail closed)
    pub early_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum entries retained in the history ring buffer
    pub max_entries: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            disabled_sources: Vec::new(),
            include_timestamp: true,
            include_source: true,
            early_logging: false,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY,
        }
    }
}

/// Get the config file path (next to the executable)
pub fn config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| LogtapError::ConfigRead {
        path: PathBuf::from("executable"),
        source: e,
    })?;
    let exe_dir = exe.parent().ok_or_else(|| LogtapError::ConfigValidation {
        field: "exe_path",
        reason: "no parent directory".into(),
    })?;
    Ok(exe_dir.join(CONFIG_FILE_NAME))
}

/// Load config from file, or fall back to defaults
pub fn load() -> Config {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to determine config path: {}, using defaults", e);
            return Config::default();
        }
    };

    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config parse error in {:?}: {}, using defaults", path, e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config {:?}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

/// Save config to file
pub fn save(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content =
        toml::to_string_pretty(config).map_err(|e| LogtapError::ConfigValidation {
            field: "config",
            reason: e.to_string(),
        })?;
    fs::write(&path, content).map_err(|e| LogtapError::ConfigRead { path, source: e })?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
