//! Scan-to-pay: camera frames from the open ScanPay dialog.

use sham_common::locale::{scanned_identity_notice, scanned_raw_notice};
use sham_platform::{FrameError, ScannedCode};

use super::core::ShamApp;
use super::types::Modal;

impl ShamApp {
    pub(super) fn on_scan_frame(&mut self, frame: Result<String, FrameError>) {
        if self.modal != Some(Modal::ScanPay) {
            tracing::debug!("frame received with no scan in progress");
            return;
        }
        let Some(code) = self.scanner.on_frame(frame) else {
            return;
        };

        let notice = match code {
            ScannedCode::Identity { name, account } => scanned_identity_notice(&name, &account),
            ScannedCode::Raw(text) => scanned_raw_notice(&text),
        };
        self.notify(notice);
        self.close_modal();
    }
}
