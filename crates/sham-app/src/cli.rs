use clap::Parser;

/// SHAM Bank: a terminal banking mock with an AI assistant.
#[derive(Parser, Debug)]
#[command(name = "sham", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start without the AI assistant.
    #[arg(long)]
    pub no_chat: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
