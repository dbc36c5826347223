//! Tracing subscriber setup.
//!
//! The terminal UI owns the alternate screen, so while it runs all log output
//! goes to a file. One-shot commands log to stderr instead.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "client.log";

/// Route logs to `<log_dir>/client.log` (no stderr output).
pub fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(())
}

/// Route logs to stderr, keeping stdout clean for command output.
pub fn setup_stderr_logging() -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// `RUST_LOG` when set, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
