//! Google Gemini chat client.
//!
//! Implements [`ChatBackend`](crate::ChatBackend) for Gemini models via the
//! Generative Language API, keeping the conversation history client-side.

mod api;
mod client;
mod config;

pub use client::GeminiChat;
pub use config::GeminiConfig;
