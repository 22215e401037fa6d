//! Platform services: clipboard access and the QR pay-by-code exchange.

pub mod clipboard;
pub mod qr;

pub use clipboard::{copy_text, Clipboard};
pub use qr::{render_qr_unicode, FrameError, QrPayload, QrScanner, ScannedCode};
