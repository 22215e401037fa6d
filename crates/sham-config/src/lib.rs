//! SHAM configuration system.
//!
//! TOML-based configuration for the chat assistant, the QR exchange and
//! logging. Every section has defaults, so an empty or partial file works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sham_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("chat model: {}", config.chat.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChatConfig, LoggingConfig, QrConfig, ShamConfig};

use sham_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// An explicit path must exist. Values that fail validation are logged and
/// returned as parsed; call [`validation::validate`] to reject them.
pub fn load_config(path: Option<&Path>) -> Result<ShamConfig, ConfigError> {
    match path {
        Some(path) if !path.exists() => Err(ConfigError::FileNotFound(path.to_path_buf())),
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
