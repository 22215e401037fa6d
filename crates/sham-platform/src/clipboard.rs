use sham_common::PlatformError;

/// System clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// Write `text` to the system clipboard, logging instead of failing.
///
/// Returns whether the write went through.
pub fn copy_text(text: &str) -> bool {
    match Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            false
        }
    }
}
