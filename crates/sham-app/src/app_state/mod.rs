//! Top-level application state.
//!
//! Coordinates navigation, dialogs, the chat overlay and the QR exchange.
//! Input arrives as parsed [`UiEvent`]s; chat turns run on the tokio
//! runtime next to the event loop.

mod chat;
mod core;
mod dispatch;
mod init;
mod navigation;
mod run;
mod scan;
mod types;
mod view;
mod wallet;

#[cfg(test)]
mod tests;

pub use self::core::ShamApp;
pub use init::connect_gemini;
