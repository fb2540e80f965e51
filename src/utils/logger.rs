//! Logging initialization and configuration.
//!
//! Logs are written to files in a `logs/` directory next to the
//! executable so they never mix with the styled command output on the
//! user's terminal. A new file is created per run.
//!
//! # Configuration
//!
//! The log level is controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize file-based logging for this run.
///
/// Each run creates a new log file with a timestamp, e.g.
/// `logs/askcmd.2026-08-23-14-30-25.log`. Failure to set up the log file
/// only prints a warning; the tool still works without logs.
pub fn init_logging() {
    let log_dir = match std::env::current_exe() {
        Ok(exe_path) => exe_path
            .parent()
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs")),
        Err(_) => PathBuf::from("logs"),
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_path = log_dir.join(format!("askcmd.{}.log", timestamp));

    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {}", e);
            return;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    // Default to "info" level if RUST_LOG is not set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the non-blocking writer alive for the entire program lifetime.
    std::mem::forget(guard);

    tracing::debug!("logging initialized - writing to {}", log_path.display());
}
