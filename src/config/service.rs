//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::Configuration;
use crate::domain::{ConfigError, Environment};
use crate::module::ModuleRegistry;

/// Path argument selecting standard input.
pub const STDIN_PATH: &str = "-";

/// Document encoding of a configuration source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path (~/.config/wmr/config.json).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("wmr")
            .join("config.json")
    }

    /// Load and validate configuration.
    ///
    /// `-` reads a JSON document from stdin. If `path` is `None` the default
    /// path is used, and a missing default file counts as an empty document
    /// so that every value can come from the environment.
    pub fn load(
        path: Option<&Path>,
        env: &dyn Environment,
        registry: &ModuleRegistry,
    ) -> Result<Configuration> {
        match path {
            Some(p) if p.as_os_str() == STDIN_PATH => {
                debug!("Reading configuration from stdin");
                Self::from_reader(io::stdin().lock(), ConfigFormat::Json, env, registry)
                    .context("Invalid configuration from stdin")
            }
            Some(p) => Self::load_file(p, env, registry),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load_file(&default, env, registry)
                } else {
                    debug!(path = %default.display(), "No configuration file, using environment only");
                    Self::finish(Configuration::default(), env, registry)
                        .context("Invalid configuration from environment")
                }
            }
        }
    }

    fn load_file(
        path: &Path,
        env: &dyn Environment,
        registry: &ModuleRegistry,
    ) -> Result<Configuration> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_reader(file, ConfigFormat::from_path(path), env, registry)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse one document from `reader` and validate it.
    ///
    /// An empty JSON stream is a parse error.
    pub fn from_reader<R: Read>(
        mut reader: R,
        format: ConfigFormat,
        env: &dyn Environment,
        registry: &ModuleRegistry,
    ) -> Result<Configuration, ConfigError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let config = Self::parse(&content, format)?;
        Self::finish(config, env, registry)
    }

    fn finish(
        mut config: Configuration,
        env: &dyn Environment,
        registry: &ModuleRegistry,
    ) -> Result<Configuration, ConfigError> {
        config.validate(env, registry)?;

        info!(
            port = %config.webserver.port,
            debug = config.webserver.debug,
            modules = ?config.modules,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Parse a document without validating it.
    ///
    /// A JSON `null` document counts as an empty configuration.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Configuration, ConfigError> {
        let config = match format {
            ConfigFormat::Json => {
                serde_json::from_str::<Option<Configuration>>(content)?.unwrap_or_default()
            }
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => Self::default_json_content(),
            ConfigFormat::Toml => Self::default_toml_content(),
        };
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Template with an empty token: set `auth_token` or `WMR_TOKEN` before starting.
    fn default_json_content() -> String {
        r#"{
  "webserver": {
    "debug": false,
    "port": "9898"
  },
  "auth_token": "",
  "modules": ["system", "service", "process"]
}
"#
        .to_string()
    }

    fn default_toml_content() -> String {
        r#"# wmr configuration file
# Every value may instead come from the environment:
#   WMR_TOKEN, WMR_MODULES (comma-separated), WMR_WEBSERVER_PORT, WMR_WEBSERVER_DEBUG
# WMR_WEBSERVER_DEBUG always overrides webserver.debug when set.

# Plaintext token; it is hashed with bcrypt at startup
auth_token = ""

# Modules to enable; unknown names are skipped
modules = ["system", "service", "process"]

[webserver]
debug = false
port = "9898"
"#
        .to_string()
    }
}
