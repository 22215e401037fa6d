//! Turn submission and the streaming render loop.

use futures_util::StreamExt;
use sham_common::{TranscriptRenderer, Turn};
use tracing::{debug, info, warn};

use crate::{AiError, ChatBackend};

use super::manager::SessionManager;
use super::types::{InputLockGuard, RejectReason, SessionStatus, TurnOutcome};

impl<R: TranscriptRenderer> SessionManager<R> {
    /// Submit one user turn and stream the reply into the transcript.
    ///
    /// Ignored (no turn, no lock) when the session is not ready, the text is
    /// blank, or another turn is in flight. Otherwise the lock is held until
    /// the reply completes or fails.
    pub async fn send_turn(&self, text: &str) -> TurnOutcome {
        let backend = match (&self.backend, self.status) {
            (Some(backend), SessionStatus::Ready) => &**backend,
            _ => {
                debug!(session = %self.id, status = ?self.status, "turn ignored: session not ready");
                return TurnOutcome::Rejected(RejectReason::NotReady);
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return TurnOutcome::Rejected(RejectReason::EmptyInput);
        }

        let Some(_lock) = InputLockGuard::try_acquire(&self.input_lock) else {
            debug!(session = %self.id, "turn ignored: reply in flight");
            return TurnOutcome::Rejected(RejectReason::Busy);
        };

        self.with_renderer(|r| {
            r.append(Turn::user(text));
            r.append(Turn::pending_assistant());
        });
        // Declared after the lock so it settles the turn before the lock drops.
        let live = LiveTurn::new(self);
        info!(session = %self.id, len = text.len(), "turn submitted");

        match self.stream_reply(backend, text).await {
            Ok(chunks) => {
                live.complete();
                info!(session = %self.id, chunks, "turn completed");
                TurnOutcome::Completed
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "error sending message");
                live.fail();
                TurnOutcome::Failed
            }
        }
    }

    /// Append every increment to the live turn, flushing each one.
    async fn stream_reply(&self, backend: &dyn ChatBackend, text: &str) -> Result<usize, AiError> {
        let mut stream = backend.send_message_stream(text).await?;
        let mut reply = String::new();
        let mut chunks = 0;

        while let Some(chunk) = stream.next().await {
            reply.push_str(&chunk?);
            chunks += 1;
            self.update_live(&reply);
        }

        Ok(chunks)
    }
}

/// The streaming assistant turn of one accepted submission.
///
/// Dropped unsettled (the turn future was cancelled), it settles the turn
/// as failed so no streaming turn outlives its input lock.
struct LiveTurn<'a, R: TranscriptRenderer> {
    manager: &'a SessionManager<R>,
    settled: bool,
}

impl<'a, R: TranscriptRenderer> LiveTurn<'a, R> {
    fn new(manager: &'a SessionManager<R>) -> Self {
        Self {
            manager,
            settled: false,
        }
    }

    fn complete(mut self) {
        self.settled = true;
        self.manager.finalize_live();
    }

    fn fail(mut self) {
        self.settled = true;
        self.settle_failed();
    }

    fn settle_failed(&self) {
        self.manager.update_live(&self.manager.error_message);
        self.manager.finalize_live();
    }
}

impl<R: TranscriptRenderer> Drop for LiveTurn<'_, R> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(session = %self.manager.id, "turn dropped before its reply settled");
            self.settle_failed();
        }
    }
}
