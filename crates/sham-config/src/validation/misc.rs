//! Validation for the `[qr]` and `[logging]` sections.

use crate::schema::ShamConfig;

use super::helpers::validate_range;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate QR constraints.
pub(crate) fn validate_qr(errors: &mut Vec<String>, config: &ShamConfig) {
    validate_range(errors, "qr.size", config.qr.size, 64, 1000);
    validate_range(errors, "qr.scan_fps", config.qr.scan_fps, 1, 60);

    let url = &config.qr.image_service_url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("qr.image_service_url = {url:?} must be an http(s) URL"));
    }
}

/// Validate logging constraints.
pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &ShamConfig) {
    let level = config.logging.level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(format!(
            "logging.level = {level:?} must be one of {}",
            LOG_LEVELS.join(", ")
        ));
    }
}
