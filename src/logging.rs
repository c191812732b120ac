//! Logging setup
//!
//! The TUI owns the terminal, so in that mode logs go to a file in the data
//! directory. Every other mode logs to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file written in TUI mode
pub const LOG_FILE_NAME: &str = "bingo.log";

/// Filter used when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Log to stderr
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_console_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install console logger")?;

    Ok(())
}

/// Log to `<log_dir>/bingo.log`
///
/// Returns a guard that must be held for the duration of the program to keep
/// logging active.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a global
/// subscriber is already installed.
pub fn setup_file_logging(log_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Failed to install file logger")?;

    tracing::info!(dir = %log_dir.display(), verbose, "logging initialized");
    Ok(guard)
}
