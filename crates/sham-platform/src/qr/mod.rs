//! QR pay-by-code: encode the user's identity, decode someone else's.

mod payload;
mod render;
mod scanner;

pub use payload::QrPayload;
pub use render::render_qr_unicode;
pub use scanner::{FrameError, QrScanner, ScannedCode};
