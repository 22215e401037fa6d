//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# SHAM Configuration
# Only override what you want to change -- missing fields use defaults.

[chat]
# enabled = true
# model = "gemini-2.5-flash"
# api_key_env = "API_KEY"     # environment variable holding the credential
# max_tokens = 4096           # 1-65536, unset uses the model default
# temperature = 0.7           # 0.0-2.0, unset uses the model default
# greeting = "مرحباً! أنا مساعد شام الذكي. كيف يمكنني مساعدتك اليوم؟"
# error_message = "عذراً، حدث خطأ ما. يرجى المحاولة مرة أخرى."

[qr]
# size = 200                  # 64-1000
# image_service_url = "https://api.qrserver.com/v1/create-qr-code/"
# scan_fps = 10               # 1-60

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
