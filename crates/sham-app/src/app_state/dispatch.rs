//! Event dispatch: routes parsed UI events to the appropriate handler.

use sham_ai::TurnOutcome;
use tokio::task::JoinHandle;

use super::chat::ScrollDirection;
use super::core::ShamApp;
use super::types::{UiEvent, HELP};

impl ShamApp {
    /// Dispatch one [`UiEvent`].
    ///
    /// A chat submission runs as a spawned task; its handle is returned so
    /// callers may await the outcome. Everything else completes inline.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<JoinHandle<TurnOutcome>> {
        tracing::debug!(?event, "dispatch");
        match event {
            UiEvent::Navigate(screen) => self.navigate(screen),
            UiEvent::OpenChat => self.open_chat(),
            UiEvent::Close => {
                if self.chat_open() {
                    self.close_chat();
                } else {
                    self.close_modal();
                }
            }
            UiEvent::ScrollUp => self.scroll_chat(ScrollDirection::Up),
            UiEvent::ScrollDown => self.scroll_chat(ScrollDirection::Down),
            UiEvent::ClearChat => self.clear_chat(),
            UiEvent::OpenModal(modal) => self.open_modal(modal),
            UiEvent::Process => self.process_modal(),
            UiEvent::SelectCoin(coin) => self.select_coin(&coin),
            UiEvent::CopyIban => self.copy_iban(),
            UiEvent::CopyAddress => self.copy_deposit_address(),
            UiEvent::AddToWallet => self.add_to_wallet(),
            UiEvent::Frame(frame) => self.on_scan_frame(frame),
            UiEvent::Submit(text) => return Some(self.submit_chat(text)),
            UiEvent::Help => self.print(HELP),
            UiEvent::Quit => {
                tracing::info!("quit requested");
                self.should_exit = true;
            }
            UiEvent::Unknown(input) => {
                tracing::debug!(%input, "unrecognized input");
                self.print("أمر غير معروف. اكتب /help");
            }
        }
        None
    }
}
