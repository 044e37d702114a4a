//! Logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a daily rolling
//! file instead of stdout/stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file name prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "catalog-tui.log";

/// Initialize file logging.
///
/// # Arguments
/// * `log_dir` - Directory for the rolling log files (created if missing)
///
/// # Returns
/// * `Result<WorkerGuard>` - Guard that flushes pending records when dropped
///
/// # Details
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");
        // Only one global subscriber can be installed per test binary
        let result = init_logging(&log_dir);
        assert!(log_dir.is_dir());
        if let Ok(_guard) = result {
            tracing::info!("logging initialized in test");
        }
    }
}
