//! Text rendering of screens, dialogs and notices.

use std::fmt::Write as _;
use std::io::Write;

use sham_platform::{render_qr_unicode, QrPayload};

use super::core::{ShamApp, MAX_NOTICES};
use super::types::{Modal, Screen};

impl ShamApp {
    /// Write a block of text to the terminal.
    pub(super) fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    /// Show a one-off notice and keep it in the recent list.
    pub(super) fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(notice = %message, "notice");
        self.print(&format!("[!] {message}"));
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(message);
    }

    pub(super) fn show_screen(&mut self) {
        let text = self.render_screen();
        self.print(&text);
    }

    pub(super) fn show_modal(&mut self) {
        if let Some(text) = self.render_modal() {
            self.print(&text);
        }
    }

    pub(super) fn render_screen(&self) -> String {
        let p = &self.profile;
        let mut s = format!("== {} ==\n", self.screen.title());
        // Writing into a String cannot fail.
        let _ = match self.screen {
            Screen::Home => {
                let contacts: Vec<String> = p
                    .quick_contacts
                    .iter()
                    .map(|c| format!("({}) {}", c.initial, c.name))
                    .collect();
                write!(
                    s,
                    "{}\nتحويل سريع: {}\n/cash /mycode /scan",
                    p.welcome_message(),
                    contacts.join("  ")
                )
            }
            Screen::Crypto => write!(s, "{}\n/deposit /withdraw /xrp", p.crypto_card.number),
            Screen::Cards => write!(
                s,
                "{}\n{}  {}\n\n{}\n{}  {}\n\nIBAN: {}\n/copy-iban /wallet",
                p.card_holder_name(),
                p.fiat_card.number,
                p.fiat_card.expiry,
                p.card_holder_name(),
                p.crypto_card.number,
                p.crypto_card.expiry,
                p.iban
            ),
            Screen::Security => write!(s, "{}", p.account_id),
        };
        if !self.fab_enabled() {
            s.push_str("\n(المساعد غير متاح)");
        } else if self.fab_visible() {
            s.push_str("\n/chat");
        }
        s
    }

    pub(super) fn render_modal(&self) -> Option<String> {
        let modal = self.modal?;
        let mut s = format!("-- {} --\n", modal.title());
        match modal {
            Modal::ShamCash | Modal::CryptoWithdraw | Modal::XrpSend => {
                s.push_str("/process /close");
            }
            Modal::CryptoDeposit => {
                match &self.deposit_address {
                    Some(address) => {
                        let _ = write!(s, "{address}\n/copy-address ");
                    }
                    None => s.push_str("/coin <SYMBOL> "),
                }
                s.push_str("/close");
            }
            Modal::MyCode => s.push_str(&self.render_my_code()),
            Modal::ScanPay => s.push_str("/frame <text> /close"),
        }
        Some(s)
    }

    /// The user's personal code: QR art, hosted image URL, name and account.
    fn render_my_code(&self) -> String {
        let payload = QrPayload::for_profile(&self.profile);
        let mut s = String::new();

        match payload.to_json().and_then(|json| render_qr_unicode(&json)) {
            Ok(art) => s.push_str(&art),
            Err(e) => tracing::warn!(error = %e, "failed to render QR code"),
        }
        match payload.image_url(&self.config.qr.image_service_url, self.config.qr.size) {
            Ok(url) => {
                let _ = writeln!(s, "{url}");
            }
            Err(e) => tracing::warn!(error = %e, "failed to build QR image URL"),
        }
        let _ = write!(
            s,
            "{}\n{}\n/close",
            self.profile.name, self.profile.account_id
        );
        s
    }
}
