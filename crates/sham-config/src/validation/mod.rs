//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod helpers;
mod misc;


use crate::schema::ShamConfig;
use sham_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShamConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chat::validate_chat(&mut errors, config);
    misc::validate_qr(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
