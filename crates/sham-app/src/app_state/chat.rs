//! AI chat overlay: open/close and turn submission.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use sham_ai::TurnOutcome;
use sham_common::locale::NOTICE_CHAT_BUSY;
use tokio::task::JoinHandle;

use super::core::ShamApp;

/// Turns moved per scroll command.
const SCROLL_STEP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScrollDirection {
    Up,
    Down,
}

impl ShamApp {
    pub(super) fn open_chat(&mut self) {
        if !self.fab_enabled() {
            tracing::debug!(status = ?self.chat.status(), "chat unavailable");
            return;
        }
        if self.chat_open() {
            return;
        }
        self.chat_visible.store(true, Ordering::Release);
        self.chat.with_renderer(|r| r.replay());
    }

    /// Hide the overlay. A streaming reply keeps going in the background.
    pub(super) fn close_chat(&mut self) {
        if self.chat_visible.swap(false, Ordering::AcqRel) && self.chat.is_locked() {
            tracing::debug!("chat closed while a reply is streaming");
        }
        self.show_screen();
    }

    pub(super) fn scroll_chat(&mut self, direction: ScrollDirection) {
        if !self.chat_open() {
            tracing::debug!(?direction, "scroll ignored with chat closed");
            return;
        }
        self.chat.with_renderer(|r| match direction {
            ScrollDirection::Up => r.scroll_up(SCROLL_STEP),
            ScrollDirection::Down => r.scroll_down(SCROLL_STEP),
        });
    }

    pub(super) fn clear_chat(&mut self) {
        if !self.chat_open() {
            tracing::debug!("clear ignored with chat closed");
            return;
        }
        if self.chat.with_renderer(|r| r.clear()) {
            tracing::info!(session = %self.chat.id(), "chat history cleared");
        } else {
            self.notify(NOTICE_CHAT_BUSY);
        }
    }

    /// Run one turn on the session as a background task.
    pub(super) fn submit_chat(&mut self, text: String) -> JoinHandle<TurnOutcome> {
        let chat = Arc::clone(&self.chat);
        tokio::spawn(async move {
            let outcome = chat.send_turn(&text).await;
            tracing::debug!(session = %chat.id(), ?outcome, "chat turn finished");
            outcome
        })
    }
}
