//! Camera-driven payment code scanning.
//!
//! The camera itself lives outside this crate: it hands each frame's decode
//! result to [`QrScanner::on_frame`]. Most frames contain no code, so
//! failures are expected and only traced.

use sham_common::PlatformError;

use super::payload::QrPayload;

/// Why a single camera frame yielded no code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("no code found in frame")]
    NotFound,

    #[error("frame decode failed: {0}")]
    Decode(String),
}

/// What a successfully decoded code turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedCode {
    /// Another user's personal payment code.
    Identity { name: String, account: String },
    /// Anything else; shown to the user verbatim.
    Raw(String),
}

impl ScannedCode {
    pub fn resolve(text: &str) -> Self {
        match serde_json::from_str::<QrPayload>(text) {
            Ok(payload) => ScannedCode::Identity {
                name: payload.name,
                account: payload.user_account,
            },
            Err(_) => ScannedCode::Raw(text.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Scanning,
}

/// One scanning session at a time; stops itself on the first decoded code.
#[derive(Debug)]
pub struct QrScanner {
    fps: u32,
    state: ScanState,
    frames_seen: u64,
}

impl QrScanner {
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            state: ScanState::Idle,
            frames_seen: 0,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    pub fn start(&mut self) -> Result<(), PlatformError> {
        if self.is_scanning() {
            return Err(PlatformError::ScannerError("scanner already running".into()));
        }
        self.state = ScanState::Scanning;
        self.frames_seen = 0;
        tracing::info!(fps = self.fps, "QR scanner started");
        Ok(())
    }

    /// Stop scanning. Stopping an idle scanner is harmless.
    pub fn stop(&mut self) {
        if self.is_scanning() {
            tracing::info!(frames = self.frames_seen, "QR scanner stopped");
        }
        self.state = ScanState::Idle;
    }

    /// Handle one frame's decode result.
    ///
    /// Returns the resolved code on the first success and stops scanning.
    /// Frames arriving while idle are dropped.
    pub fn on_frame(&mut self, frame: Result<String, FrameError>) -> Option<ScannedCode> {
        if !self.is_scanning() {
            return None;
        }
        self.frames_seen += 1;

        match frame {
            Ok(text) => {
                let code = ScannedCode::resolve(&text);
                tracing::info!(
                    identity = matches!(code, ScannedCode::Identity { .. }),
                    "QR code scanned"
                );
                self.stop();
                Some(code)
            }
            Err(e) => {
                tracing::trace!(error = %e, frame = self.frames_seen, "no QR code in frame");
                None
            }
        }
    }
}
