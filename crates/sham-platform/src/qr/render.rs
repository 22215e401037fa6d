//! Terminal rendering of QR codes.

use qrcode::{Color, QrCode};
use sham_common::PlatformError;

/// Render `data` as a QR code of Unicode half-block characters.
/// Each character represents two rows of modules (upper/lower).
pub fn render_qr_unicode(data: &str) -> Result<String, PlatformError> {
    let code =
        QrCode::new(data.as_bytes()).map_err(|e| PlatformError::QrEncodeError(e.to_string()))?;
    let modules = code.to_colors();
    let width = code.width();

    let mut result = String::new();

    // ▀ top dark, ▄ bottom dark, █ both dark, space both light
    let mut y = 0;
    while y < width {
        result.push_str("  ");
        for x in 0..width {
            let top = modules[y * width + x];
            let bottom = if y + 1 < width {
                modules[(y + 1) * width + x]
            } else {
                Color::Light
            };

            let ch = match (top, bottom) {
                (Color::Dark, Color::Dark) => '█',
                (Color::Dark, Color::Light) => '▀',
                (Color::Light, Color::Dark) => '▄',
                (Color::Light, Color::Light) => ' ',
            };
            result.push(ch);
        }
        result.push('\n');
        y += 2;
    }

    Ok(result)
}
