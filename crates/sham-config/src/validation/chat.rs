//! Validation for the `[chat]` section.

use std::sync::OnceLock;

use regex::Regex;

use crate::schema::ShamConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

fn model_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._\-]*$").expect("valid model regex"))
}

fn env_var_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid env var regex"))
}

/// Validate chat assistant constraints.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ShamConfig) {
    let chat = &config.chat;

    if !model_pattern().is_match(&chat.model) {
        errors.push(format!("chat.model = {:?} is not a valid model id", chat.model));
    }
    if !env_var_pattern().is_match(&chat.api_key_env) {
        errors.push(format!(
            "chat.api_key_env = {:?} is not a valid environment variable name",
            chat.api_key_env
        ));
    }

    validate_not_blank(errors, "chat.greeting", &chat.greeting);
    validate_not_blank(errors, "chat.error_message", &chat.error_message);
    if let Some(max_tokens) = chat.max_tokens {
        validate_range(errors, "chat.max_tokens", max_tokens, 1, 65536);
    }
    if let Some(temperature) = chat.temperature {
        validate_range_f64(errors, "chat.temperature", temperature, 0.0, 2.0);
    }
}
