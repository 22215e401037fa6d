//! SessionManager struct, initialization, and renderer access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use sham_common::locale::{CHAT_GREETING, CHAT_STREAM_ERROR};
use sham_common::{RenderError, SessionId, TranscriptRenderer, Turn};
use tracing::{error, info, warn};

use crate::{AiError, ChatBackend};

use super::types::SessionStatus;

/// Owner of the one chat session in the process.
pub struct SessionManager<R> {
    pub(super) id: SessionId,
    pub(super) status: SessionStatus,
    pub(super) backend: Option<Box<dyn ChatBackend>>,
    pub(super) renderer: Mutex<R>,
    /// Held from submission until the reply completes or fails.
    pub(super) input_lock: AtomicBool,
    pub(super) greeting: String,
    pub(super) error_message: String,
}

impl<R: TranscriptRenderer> SessionManager<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            id: SessionId::new(),
            status: SessionStatus::Uninitialized,
            backend: None,
            renderer: Mutex::new(renderer),
            input_lock: AtomicBool::new(false),
            greeting: CHAT_GREETING.to_string(),
            error_message: CHAT_STREAM_ERROR.to_string(),
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Establish the session.
    ///
    /// `connect` reads the credential and creates the service chat. Any
    /// failure leaves the session `Unavailable` for the rest of the process;
    /// it is logged and never propagated. On success the greeting is shown.
    pub fn initialize<F>(&mut self, connect: F) -> SessionStatus
    where
        F: FnOnce() -> Result<Box<dyn ChatBackend>, AiError>,
    {
        if self.status != SessionStatus::Uninitialized {
            warn!(session = %self.id, status = ?self.status, "chat session already initialized");
            return self.status;
        }

        match connect() {
            Ok(backend) => {
                self.backend = Some(backend);
                self.status = SessionStatus::Ready;
                let greeting = Turn::assistant(self.greeting.clone());
                self.with_renderer(|r| r.append(greeting));
                info!(session = %self.id, "chat session ready");
            }
            Err(e) => {
                self.status = SessionStatus::Unavailable;
                error!(session = %self.id, error = %e, "failed to initialize AI chat");
            }
        }

        self.status
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }

    /// Whether a turn is in flight.
    pub fn is_locked(&self) -> bool {
        self.input_lock.load(Ordering::Acquire)
    }

    /// Run `f` with exclusive access to the renderer.
    ///
    /// Never hold on to this across an await point.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut renderer = self.renderer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut renderer)
    }

    pub(super) fn update_live(&self, text: &str) {
        if let Err(e) = self.with_renderer(|r| r.update_live(text)) {
            self.report_violation(e);
        }
    }

    pub(super) fn finalize_live(&self) {
        if let Err(e) = self.with_renderer(|r| r.finalize()) {
            self.report_violation(e);
        }
    }

    fn report_violation(&self, e: RenderError) {
        error!(session = %self.id, error = %e, "transcript invariant violated");
        debug_assert!(false, "transcript invariant violated: {e}");
    }
}
