mod app_state;
mod cli;

use std::path::Path;

use sham_config::ShamConfig;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/sham-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Read the config file. Errors are returned alongside the defaults so
/// they can be logged once logging is up.
fn load_config(args: &cli::Args) -> (ShamConfig, Option<sham_common::ConfigError>) {
    match sham_config::load_config(args.config.as_deref().map(Path::new)) {
        Ok(config) => (config, None),
        Err(e) => (ShamConfig::default(), Some(e)),
    }
}

fn init_logging(directive: &str) {
    let directive = if directive.contains('=') {
        directive.to_string()
    } else {
        format!("sham={directive}")
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "sham=info".parse().unwrap()),
            ),
        )
        .init();
}

fn main() {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();
    let (mut config, load_error) = load_config(&args);

    let log_directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(log_directive);

    tracing::info!("SHAM v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    match load_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => {
            if let Err(e) = sham_config::validation::validate(&config) {
                tracing::warn!("Config has invalid values: {e}");
            }
        }
    }

    if args.no_chat {
        config.chat.enabled = false;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return;
        }
    };

    let chat_config = config.chat.clone();
    let app = app_state::ShamApp::new(
        config,
        Box::new(std::io::stdout()),
        Box::new(std::io::stdout()),
        || app_state::connect_gemini(&chat_config),
    );
    tracing::info!(chat = ?app.chat_status(), "Entering event loop");

    if let Err(e) = runtime.block_on(app.run()) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
