use std::path::PathBuf;

use clap::Parser;

/// Hybrid Shell: a native window around one web view with a message bridge.
#[derive(Parser, Debug)]
#[command(name = "hybrid-shell", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Entry URL override.
    #[arg(long)]
    pub url: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
