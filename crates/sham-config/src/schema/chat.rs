//! Chat assistant configuration types.

use serde::{Deserialize, Serialize};
use sham_common::locale::{CHAT_GREETING, CHAT_STREAM_ERROR};

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a friendly and helpful banking assistant for بنك شام (SHAM Bank).
Your name is 'مساعد شام الذكي'.
You can answer questions about the bank's services, like opening accounts, transaction types, and general information about crypto.
You should not ask for personal information like passwords or account numbers.
When asked about account balance or specific transactions, you should explain that you don't have access to real-time personal data for security reasons but you can guide the user on how to find it in the app.
All your responses must be in Arabic.";

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// When false the assistant is never initialized.
    pub enabled: bool,
    pub model: String,
    pub system_instruction: String,
    /// First assistant message shown after a successful start.
    pub greeting: String,
    /// Replaces an assistant reply whose stream failed.
    pub error_message: String,
    /// Environment variable holding the API credential.
    pub api_key_env: String,
    /// Unset leaves the reply length to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-2.5-flash".into(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.into(),
            greeting: CHAT_GREETING.into(),
            error_message: CHAT_STREAM_ERROR.into(),
            api_key_env: "API_KEY".into(),
            max_tokens: None,
            temperature: None,
        }
    }
}
