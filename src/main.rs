//! billform binary entrypoint kept minimal. The runtime lives in `app`.

mod app;
mod args;
mod events;
mod format;
mod guard;
mod notify;
mod state;
mod theme;
mod ui;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct BillformTimer;

impl tracing_subscriber::fmt::time::FormatTime for BillformTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%d-T%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing logger writing to `logs/billform.log`.
///
/// Inputs:
/// - `log_level`: Default filter used when `RUST_LOG` is unset.
///
/// Output:
/// - No return value; falls back to a stderr logger when the log file
///   cannot be opened.
fn init_logging(log_level: &str) {
    let mut log_path = crate::theme::logs_dir();
    log_path.push("billform.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BillformTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(BillformTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&cli.log_level);
    tracing::info!(headless = cli.headless, "billform starting");
    if let Err(err) = app::run(cli.headless).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("billform exited");
}
