//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Startup configuration for the windows-management REST service
#[derive(Parser)]
#[command(
    name = "wmr",
    version,
    about = "Startup configuration for the windows-management REST service",
    long_about = "Loads the service configuration from a JSON or TOML document, \
                  merges it with WMR_* environment variables, hashes the auth token \
                  and resolves the enabled modules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file ("-" reads JSON from stdin)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also write logs to daily rotated files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration
    Check,
    /// Print the resolved configuration as JSON (token hashed)
    Show,
    /// Generate a configuration template
    Init {
        /// Path where to create the configuration file (.json or .toml)
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// List modules available in this binary
    Modules,
    /// Display version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["wmr", "check", "-c", "-", "--debug", "-q"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("-")));
        assert!(cli.debug);
        assert!(cli.quiet);
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn test_init_path() {
        let cli = Cli::parse_from(["wmr", "init", "--path", "/tmp/wmr.toml"]);
        match cli.command {
            Commands::Init { path } => assert_eq!(path, Some(PathBuf::from("/tmp/wmr.toml"))),
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
