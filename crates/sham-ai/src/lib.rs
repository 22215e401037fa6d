//! AI chat engine for SHAM.
//!
//! Provides:
//! - A Gemini chat client with Server-Sent Events streaming
//! - The [`ChatBackend`] seam every response service implements
//! - The [`SessionManager`] that serializes turns and drives a transcript

pub mod gemini;
pub mod session;
pub mod streaming;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

pub use gemini::{GeminiChat, GeminiConfig};
pub use session::{RejectReason, SessionManager, SessionStatus, TurnOutcome};

/// Ordered text increments of one assistant reply. The stream ends after
/// the last increment or after the first error.
pub type ChunkStream = BoxStream<'static, Result<String, AiError>>;

/// A conversational response service.
///
/// The service keeps the conversation history itself: each call carries
/// only the new user turn.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message_stream(&self, message: &str) -> Result<ChunkStream, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("not configured: {0}")]
    NotConfigured(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
