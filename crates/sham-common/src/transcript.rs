//! Chat transcript model shared by the session manager and the renderers.
//!
//! A [`Turn`] is one message in the conversation. User turns are frozen at
//! construction; assistant turns may be created in the streaming state, in
//! which case their text can be replaced until [`Turn::finish`] is called.

use serde::{Deserialize, Serialize};

/// Who wrote a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    author: Author,
    text: String,
    streaming: bool,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            streaming: false,
        }
    }

    /// A complete assistant message (e.g. the greeting).
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            text: text.into(),
            streaming: false,
        }
    }

    /// An empty assistant message waiting for its first increment.
    pub fn pending_assistant() -> Self {
        Self {
            author: Author::Assistant,
            text: String::new(),
            streaming: true,
        }
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Replace the text of a streaming turn.
    pub fn set_live_text(&mut self, text: &str) -> Result<(), RenderError> {
        if !self.streaming {
            return Err(RenderError::NoActiveStream);
        }
        self.text.clear();
        self.text.push_str(text);
        Ok(())
    }

    /// Freeze a streaming turn.
    pub fn finish(&mut self) -> Result<(), RenderError> {
        if !self.streaming {
            return Err(RenderError::NoActiveStream);
        }
        self.streaming = false;
        Ok(())
    }
}

/// Contract breaches between the session manager and a renderer.
///
/// These never occur while turns are serialized; seeing one is a defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no assistant turn is currently streaming")]
    NoActiveStream,
}

/// Display surface for the chat transcript.
///
/// Implementations own the ordered list of turns and at most one live
/// (streaming) entry. Every call should bring the newest content into view.
pub trait TranscriptRenderer: Send {
    /// Add a turn at the end. A streaming turn shows a pending marker until
    /// its first update or finalization.
    fn append(&mut self, turn: Turn);

    /// Replace the visible text of the live turn.
    fn update_live(&mut self, text: &str) -> Result<(), RenderError>;

    /// Drop the pending marker and freeze the live turn.
    fn finalize(&mut self) -> Result<(), RenderError>;
}
