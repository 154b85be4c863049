//! wmr: startup configuration for the windows-management REST service
//!
//! Loads the webserver settings, authentication token and enabled modules,
//! validates them once and hands the result to the rest of the service.

mod cli;
mod config;
mod domain;
mod module;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use cli::{Cli, Commands};
use config::{ConfigService, Configuration};
use domain::{ConfigError, ProcessEnv};
use module::ModuleRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes first so configuration warnings are visible
    domain::logger::init(cli.debug, cli.log_dir.as_deref())?;

    match cli.command {
        Commands::Check => {
            load(&cli)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Show => {
            let config = load(&cli)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Init { ref path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(p)?;
                p.clone()
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Modules => {
            for module in ModuleRegistry::builtin().iter() {
                println!("{:<10} {}", module.name(), module.description());
            }
        }
        Commands::Version => {
            println!("wmr {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load the configuration against the process environment and built-in modules.
fn load(cli: &Cli) -> Result<Configuration> {
    let registry = ModuleRegistry::builtin();
    ConfigService::load(cli.config.as_deref(), &ProcessEnv, &registry).map_err(|e| {
        let field = e
            .downcast_ref::<ConfigError>()
            .map(ConfigError::field)
            .unwrap_or("document");
        error!(configuration = field, "{:#}", e);
        e
    })
}
