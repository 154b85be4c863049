//! Configuration management module.
//!
//! Loads the JSON (or TOML) startup document, merges it with `WMR_*`
//! environment variables, hashes the token and resolves enabled modules.

mod service;
mod token;
mod types;
mod validation;

pub use service::ConfigService;
pub use token::TokenCommitter;
pub use types::{Configuration, Webserver};
