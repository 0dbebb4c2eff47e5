//! Command-line argument definition and processing.

use clap::Parser;

/// billform - a small payment-entry TUI with toast notifications
#[derive(Parser, Debug)]
#[command(name = "billform")]
#[command(version)]
#[command(
    about = "A small payment-entry TUI with transient toast notifications",
    long_about = None
)]
pub struct Args {
    /// Run without touching the terminal (for tests and CI)
    #[arg(long)]
    pub headless: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
