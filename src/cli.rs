//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::Parser;

/// Runtime log filtering with source discovery
#[derive(Parser, Debug, Default)]
#[command(name = "logtap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimum level to emit (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<String>,

    /// Disable a source from the start (repeatable, overrides config)
    #[arg(long = "disable", value_name = "SOURCE")]
    pub disabled_sources: Vec<String>,

    /// Run without a state store attached (demonstrates fail-closed behavior)
    #[arg(long)]
    pub no_store: bool,

    /// Allow emission before a store is attached
    #[arg(long)]
    pub early_logging: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["logtap"]);
        assert!(!cli.verbose);
        assert!(!cli.no_store);
        assert!(!cli.early_logging);
        assert!(cli.min_level.is_none());
        assert!(cli.disabled_sources.is_empty());
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["logtap", "-v"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["logtap", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_min_level() {
        let cli = Cli::parse_from(["logtap", "--min-level", "warn"]);
        assert_eq!(cli.min_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_cli_parse_repeated_disable() {
        let cli = Cli::parse_from(["logtap", "--disable", "Net", "--disable", "Ui"]);
        assert_eq!(cli.disabled_sources, vec!["Net", "Ui"]);
    }

    #[test]
    fn test_cli_parse_no_store() {
        let cli = Cli::parse_from(["logtap", "--no-store", "--early-logging"]);
        assert!(cli.no_store);
        assert!(cli.early_logging);
    }
}
