//! Session types and the input-lock guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Connection state of the chat session.
///
/// `Ready` and `Unavailable` are terminal: there is no re-initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Uninitialized,
    Ready,
    Unavailable,
}

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The session is not `Ready`.
    NotReady,
    /// The text was empty after trimming.
    EmptyInput,
    /// Another turn is still streaming.
    Busy,
}

/// Result of one `send_turn` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The reply streamed to completion.
    Completed,
    /// The reply failed and was replaced with the error message.
    Failed,
    /// Nothing happened.
    Rejected(RejectReason),
}

impl TurnOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Guard that releases the input lock on drop, so the lock is freed exactly
/// once whether the turn completes, fails, or its future is dropped.
/// A dropped turn's live entry is settled first (see `LiveTurn`).
pub(crate) struct InputLockGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InputLockGuard<'a> {
    /// Take the lock, or `None` if it is already held.
    pub(crate) fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InputLockGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
