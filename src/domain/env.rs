//! Read-only access to environment variables.

use std::collections::BTreeMap;

/// Comma-separated list of modules to enable.
pub const WMR_MODULES: &str = "WMR_MODULES";
/// Plaintext authentication token fallback.
pub const WMR_TOKEN: &str = "WMR_TOKEN";
/// Webserver port fallback.
pub const WMR_WEBSERVER_PORT: &str = "WMR_WEBSERVER_PORT";
/// Webserver debug override.
pub const WMR_WEBSERVER_DEBUG: &str = "WMR_WEBSERVER_DEBUG";

/// Source of named environment variables.
pub trait Environment {
    /// Raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value the same as an unset one.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// Process environment.
///
/// A value that is not valid Unicode is still reported as set, with invalid
/// sequences replaced, so that validation rejects it instead of skipping it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
