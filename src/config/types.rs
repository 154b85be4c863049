//! Configuration data types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{validation, TokenCommitter};
use crate::domain::{ConfigError, Environment};
use crate::module::ModuleRegistry;

/// Port used when neither the document nor the environment sets one.
pub const DEFAULT_PORT: &str = "9898";

/// Main configuration structure.
///
/// After [`Configuration::validate`] the token holds a bcrypt hash and
/// `modules` only names registered modules.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Webserver network settings
    #[serde(deserialize_with = "null_as_default")]
    pub webserver: Webserver,

    /// Authentication token: plaintext until committed, bcrypt hash after
    #[serde(rename = "auth_token", deserialize_with = "null_as_default")]
    pub token: String,

    /// Enabled modules, in request order
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<String>,
}

impl Configuration {
    /// Validate in place, falling back to `env` for missing values and
    /// dropping modules absent from `registry`.
    pub fn validate(
        &mut self,
        env: &dyn Environment,
        registry: &ModuleRegistry,
    ) -> Result<(), ConfigError> {
        validation::validate(self, env, registry, &TokenCommitter::default())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("webserver", &self.webserver)
            .field("token", &"<redacted>")
            .field("modules", &self.modules)
            .finish()
    }
}

/// Webserver network settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Webserver {
    /// Enable webserver debug mode
    #[serde(deserialize_with = "null_as_default")]
    pub debug: bool,

    /// TCP port, kept as text; validated to parse as an integer
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,
}

impl Webserver {
    /// Resolve port and debug flag against the environment.
    pub fn validate(&mut self, env: &dyn Environment) -> Result<(), ConfigError> {
        validation::validate_webserver(self, env)
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_optional() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config.webserver, Webserver::default());
        assert!(config.token.is_empty());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_parse_full_document() {
        let config: Configuration = serde_json::from_str(
            r#"{
                "webserver": { "debug": true, "port": "8080" },
                "auth_token": "secret",
                "modules": ["system", "process"]
            }"#,
        )
        .unwrap();

        assert!(config.webserver.debug);
        assert_eq!(config.webserver.port, "8080");
        assert_eq!(config.token, "secret");
        assert_eq!(config.modules, vec!["system", "process"]);
    }

    #[test]
    fn test_partial_webserver_uses_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"webserver": {"port": "1"}}"#).unwrap();
        assert!(!config.webserver.debug);
        assert_eq!(config.webserver.port, "1");
    }

    #[test]
    fn test_null_fields_are_absent() {
        let config: Configuration = serde_json::from_str(
            r#"{"webserver": null, "auth_token": null, "modules": null}"#,
        )
        .unwrap();
        assert_eq!(config.webserver, Webserver::default());
        assert!(config.token.is_empty());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_error() {
        assert!(serde_json::from_str::<Configuration>(r#"{"webserver": {"port": 8080}}"#).is_err());
        assert!(serde_json::from_str::<Configuration>(r#"{"modules": "a"}"#).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Configuration {
            token: "secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_serializes_token_as_auth_token() {
        let config = Configuration {
            token: "hash".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["auth_token"], "hash");
        assert_eq!(value["webserver"]["port"], "");
    }
}
