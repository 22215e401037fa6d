//! Card and crypto wallet actions: clipboard copies and deposit addresses.

use sham_common::locale::{NOTICE_ADDRESS_COPIED, NOTICE_ADD_TO_WALLET, NOTICE_IBAN_COPIED};

use super::core::ShamApp;

/// A mock deposit address for `coin`: `0x...{COIN}...{8 base-36 chars}`.
pub(super) fn generate_deposit_address(coin: &str) -> String {
    let suffix: String = (0..8)
        .map(|_| {
            let idx = rand::random::<u8>() % 36;
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'a' + idx - 10) as char
            }
        })
        .collect();
    format!("0x...{coin}...{suffix}")
}

impl ShamApp {
    pub(super) fn select_coin(&mut self, coin: &str) {
        let coin = coin.trim();
        if coin.is_empty() {
            self.deposit_coin = None;
            self.deposit_address = None;
        } else {
            self.deposit_coin = Some(coin.to_string());
            self.deposit_address = Some(generate_deposit_address(coin));
        }
        self.show_modal();
    }

    pub(super) fn copy_iban(&mut self) {
        let iban = self.profile.iban.clone();
        if (self.copy_text)(&iban) {
            self.notify(NOTICE_IBAN_COPIED);
        }
    }

    pub(super) fn copy_deposit_address(&mut self) {
        let Some(address) = self.deposit_address.clone() else {
            return;
        };
        if (self.copy_text)(&address) {
            tracing::debug!(coin = ?self.deposit_coin, "deposit address copied");
            self.notify(NOTICE_ADDRESS_COPIED);
        }
    }

    pub(super) fn add_to_wallet(&mut self) {
        self.notify(NOTICE_ADD_TO_WALLET);
    }
}
