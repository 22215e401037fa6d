//! Configuration schema types for SHAM.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod qr;
mod system;

pub use chat::*;
pub use qr::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShamConfig {
    pub chat: ChatConfig,
    pub qr: QrConfig,
    pub logging: LoggingConfig,
}
