//! Screen switching and dialog lifecycle.

use sham_common::locale::{NOTICE_CRYPTO_WITHDRAW, NOTICE_SHAM_CASH, NOTICE_XRP_SEND};

use super::core::ShamApp;
use super::types::{Modal, Screen};

impl ShamApp {
    pub(super) fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        }
        self.screen = screen;
        self.show_screen();
    }

    pub(super) fn open_modal(&mut self, modal: Modal) {
        if self.modal.is_some() {
            self.close_modal();
        }
        self.modal = Some(modal);

        if modal == Modal::ScanPay {
            if let Err(e) = self.scanner.start() {
                tracing::warn!(error = %e, "unable to start scanning");
            }
        }
        self.show_modal();
    }

    pub(super) fn close_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        if modal == Modal::ScanPay {
            self.scanner.stop();
        }
        tracing::debug!(?modal, "modal closed");
    }

    /// Confirm the open dialog. Only the transfer dialogs have an action:
    /// it shows a fixed notice and closes the dialog.
    pub(super) fn process_modal(&mut self) {
        let notice = match self.modal {
            Some(Modal::ShamCash) => NOTICE_SHAM_CASH,
            Some(Modal::CryptoWithdraw) => NOTICE_CRYPTO_WITHDRAW,
            Some(Modal::XrpSend) => NOTICE_XRP_SEND,
            other => {
                tracing::debug!(modal = ?other, "nothing to process");
                return;
            }
        };
        self.notify(notice);
        self.close_modal();
    }
}
