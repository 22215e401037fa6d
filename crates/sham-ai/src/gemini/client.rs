//! Gemini chat struct, request building, and stream-chunk parsing.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::{AiError, Message, Role};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A Gemini conversation: one model, one system instruction, and the
/// history of completed exchanges.
pub struct GeminiChat {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) history: Arc<Mutex<Vec<Message>>>,
}

impl GeminiChat {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::NotConfigured(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http,
            history: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Completed exchanges, oldest first.
    pub fn history(&self) -> Vec<Message> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn stream_url(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            GEMINI_API_BASE, self.config.model
        )
    }

    /// Build the JSON request body: prior history plus the new user turn.
    pub(crate) fn build_request_body(&self, message: &str) -> serde_json::Value {
        let history = self.history();
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": Role::User,
            "parts": [{ "text": message }]
        }));

        let mut body = serde_json::json!({ "contents": contents });

        let mut generation = serde_json::Map::new();
        if let Some(max_tokens) = self.config.max_tokens {
            generation.insert("maxOutputTokens".into(), max_tokens.into());
        }
        if let Some(temperature) = self.config.temperature {
            generation.insert("temperature".into(), temperature.into());
        }
        if !generation.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation);
        }

        if let Some(ref instruction) = self.config.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": instruction }]
            });
        }

        body
    }
}

/// Extract the text of one streamed `GenerateContentResponse` chunk.
///
/// Returns `Ok(None)` for chunks without text (e.g. usage-only chunks).
pub(crate) fn parse_stream_chunk(data: &str) -> Result<Option<String>, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

    if let Some(error) = json.get("error") {
        let message = error["message"].as_str().unwrap_or("unknown error");
        return Err(AiError::ApiError(message.to_string()));
    }

    let mut text = String::new();
    if let Some(candidates) = json["candidates"].as_array() {
        for candidate in candidates {
            if let Some(parts) = candidate["content"]["parts"].as_array() {
                for part in parts {
                    if let Some(t) = part["text"].as_str() {
                        text.push_str(t);
                    }
                }
            }
        }
    }

    Ok((!text.is_empty()).then_some(text))
}
