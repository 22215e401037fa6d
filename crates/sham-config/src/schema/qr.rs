//! Pay-by-code (QR) configuration types.

use serde::{Deserialize, Serialize};

/// QR code generation and scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Edge length in pixels of the hosted QR image.
    pub size: u32,
    /// Endpoint that renders a QR image for `size` and `data` query params.
    pub image_service_url: String,
    /// Camera frames decoded per second while scanning.
    pub scan_fps: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: 200,
            image_service_url: "https://api.qrserver.com/v1/create-qr-code/".into(),
            scan_fps: 10,
        }
    }
}
