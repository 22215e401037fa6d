//! Chat session bootstrap: credential lookup and Gemini client creation.

use sham_ai::{AiError, ChatBackend, GeminiChat, GeminiConfig};
use sham_config::ChatConfig;

/// Create the Gemini chat described by `chat`.
///
/// Fails with `AiError::NotConfigured` when the credential variable is unset.
pub fn connect_gemini(chat: &ChatConfig) -> Result<Box<dyn ChatBackend>, AiError> {
    let mut config = GeminiConfig::from_env(&chat.api_key_env)?.with_model(chat.model.clone());
    if let Some(max_tokens) = chat.max_tokens {
        config = config.with_max_tokens(max_tokens);
    }
    if let Some(temperature) = chat.temperature {
        config = config.with_temperature(temperature);
    }
    if !chat.system_instruction.trim().is_empty() {
        config = config.with_system_instruction(chat.system_instruction.clone());
    }

    let client = GeminiChat::new(config)?;
    tracing::info!(model = client.model(), "Gemini chat created");
    Ok(Box::new(client))
}
