//! Domain layer shared by configuration and the CLI.
//!
//! This module contains:
//! - Error types
//! - Environment variable access
//! - Logger with rotation

pub mod env;
mod error;
pub mod logger;

pub use env::{Environment, ProcessEnv};
pub use error::ConfigError;
