//! Chat session management.
//!
//! A [`SessionManager`] owns the single conversation with the response
//! service, the input lock that serializes turns, and the transcript
//! renderer that displays them.

mod chat;
mod manager;
mod types;


pub use manager::SessionManager;
pub use types::{RejectReason, SessionStatus, TurnOutcome};
