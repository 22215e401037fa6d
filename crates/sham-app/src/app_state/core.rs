//! ShamApp struct definition and constructor.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sham_ai::{AiError, ChatBackend, SessionManager, SessionStatus};
use sham_common::UserProfile;
use sham_config::ShamConfig;
use sham_platform::QrScanner;
use sham_renderer::ConsoleTranscript;

use super::types::{Modal, Screen};

/// Terminal output shared by the app and the chat transcript.
pub type Output = Box<dyn Write + Send>;

pub(super) type ChatSession = SessionManager<ConsoleTranscript<Output>>;

/// Most recent notices kept for inspection.
pub(super) const MAX_NOTICES: usize = 16;

/// Top-level application state.
pub struct ShamApp {
    pub(super) config: ShamConfig,
    pub(super) profile: UserProfile,
    pub(super) out: Output,

    // Navigation
    pub(super) screen: Screen,
    pub(super) modal: Option<Modal>,

    // AI chat overlay
    pub(super) chat: Arc<ChatSession>,
    pub(super) chat_visible: Arc<AtomicBool>,

    // Crypto deposit
    pub(super) deposit_coin: Option<String>,
    pub(super) deposit_address: Option<String>,

    // Scan to pay
    pub(super) scanner: QrScanner,

    pub(super) copy_text: fn(&str) -> bool,
    pub(super) notices: VecDeque<String>,

    pub(super) should_exit: bool,
}

impl ShamApp {
    /// Build the app and establish the one chat session.
    ///
    /// `connect` is only called when chat is enabled in `config`.
    pub fn new<F>(config: ShamConfig, out: Output, chat_out: Output, connect: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn ChatBackend>, AiError>,
    {
        let chat_visible = Arc::new(AtomicBool::new(false));
        let renderer = ConsoleTranscript::new(chat_out, Arc::clone(&chat_visible));
        let mut chat = SessionManager::new(renderer)
            .with_greeting(config.chat.greeting.clone())
            .with_error_message(config.chat.error_message.clone());

        if config.chat.enabled {
            chat.initialize(connect);
        } else {
            chat.initialize(|| Err(AiError::NotConfigured("chat is disabled".into())));
        }

        let scanner = QrScanner::new(config.qr.scan_fps);

        Self {
            config,
            profile: UserProfile::demo(),
            out,
            screen: Screen::default(),
            modal: None,
            chat: Arc::new(chat),
            chat_visible,
            deposit_coin: None,
            deposit_address: None,
            scanner,
            copy_text: sham_platform::copy_text,
            notices: VecDeque::with_capacity(MAX_NOTICES),
            should_exit: false,
        }
    }

    pub fn chat_status(&self) -> SessionStatus {
        self.chat.status()
    }

    pub fn chat_open(&self) -> bool {
        self.chat_visible.load(Ordering::Acquire)
    }

    /// The floating chat button: hidden while the overlay is open.
    pub fn fab_visible(&self) -> bool {
        !self.chat_open()
    }

    /// The floating chat button does nothing without a session.
    pub fn fab_enabled(&self) -> bool {
        self.chat.is_ready()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}
