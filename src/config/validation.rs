//! Configuration validation.

use tracing::{debug, error};

use super::types::DEFAULT_PORT;
use super::{Configuration, TokenCommitter, Webserver};
use crate::domain::env::{WMR_MODULES, WMR_TOKEN, WMR_WEBSERVER_DEBUG, WMR_WEBSERVER_PORT};
use crate::domain::{ConfigError, Environment};
use crate::module::ModuleRegistry;

/// Validate configuration.
///
/// Document values win over the environment except for the webserver debug
/// flag, which the environment always overrides.
pub fn validate(
    config: &mut Configuration,
    env: &dyn Environment,
    registry: &ModuleRegistry,
    committer: &TokenCommitter,
) -> Result<(), ConfigError> {
    config.webserver.validate(env)?;

    // Token
    if config.token.is_empty() {
        config.token = env.non_empty(WMR_TOKEN).ok_or(ConfigError::MissingToken)?;
        debug!(configuration = "token", "token taken from {}", WMR_TOKEN);
    }
    committer.commit(&mut config.token)?;

    // Modules
    if config.modules.is_empty() {
        let from_env = env.non_empty(WMR_MODULES).ok_or(ConfigError::MissingModules)?;
        config.modules = from_env.split(',').map(str::to_string).collect();
        debug!(configuration = "modules", "modules taken from {}", WMR_MODULES);
    }
    config.modules = registry.filter(&config.modules);

    Ok(())
}

/// Validate webserver settings.
pub fn validate_webserver(
    webserver: &mut Webserver,
    env: &dyn Environment,
) -> Result<(), ConfigError> {
    if webserver.port.is_empty() {
        webserver.port = env
            .non_empty(WMR_WEBSERVER_PORT)
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
    }
    if webserver.port.parse::<i64>().is_err() {
        return Err(ConfigError::InvalidPort(webserver.port.clone()));
    }

    if let Some(raw) = env.non_empty(WMR_WEBSERVER_DEBUG) {
        match parse_bool(&raw) {
            Some(debug) => webserver.debug = debug,
            None => error!(
                configuration = "webserver",
                value = %raw,
                "{} is not a valid boolean for {}, keeping debug={}",
                raw,
                WMR_WEBSERVER_DEBUG,
                webserver.debug
            ),
        }
    }

    Ok(())
}

/// Parse the boolean spellings accepted for the debug override.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
