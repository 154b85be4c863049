//! Error types for wmr.

use thiserror::Error;

/// Errors raised while loading or validating the startup configuration.
///
/// Every variant is fatal: the service cannot start without a valid
/// configuration. The single non-fatal case (a malformed debug override)
/// is logged instead of being returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the configuration source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document could not be decoded
    #[error("unable to decode json: {0}")]
    Parse(#[from] serde_json::Error),

    /// TOML document could not be decoded
    #[error("unable to decode toml: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Resolved port does not parse as an integer
    #[error("{0} is not a valid webserver port")]
    InvalidPort(String),

    /// Neither the document nor the environment supplied a token
    #[error("a valid authentication token must be set")]
    MissingToken,

    /// Neither the document nor the environment supplied modules
    #[error("at least a valid module must be set")]
    MissingModules,

    /// Hashing the token failed
    #[error("invalid token configuration: {0}")]
    TokenCommit(#[from] bcrypt::BcryptError),
}

impl ConfigError {
    /// Configuration section the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::Io(_) | ConfigError::Parse(_) | ConfigError::ParseToml(_) => "document",
            ConfigError::InvalidPort(_) => "webserver",
            ConfigError::MissingToken | ConfigError::TokenCommit(_) => "token",
            ConfigError::MissingModules => "modules",
        }
    }
}
