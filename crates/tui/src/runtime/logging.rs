//! File logging setup.
//!
//! The TUI owns stdout, so every log line goes to a daily-rotated file
//! under the log directory. Filtering follows `RUST_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE_NAME: &str = "settings-tui.log";

/// Log directory to use: the explicit one, the per-user data dir, or `logs`.
pub fn resolve_log_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| settings_config::paths::default_log_dir().ok())
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber writing to `log_dir`.
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_log_dir_wins() {
        let dir = resolve_log_dir(Some(PathBuf::from("/tmp/custom-logs")));
        assert_eq!(dir, PathBuf::from("/tmp/custom-logs"));
    }

    #[test]
    fn test_init_logging_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");

        let _guard = init_logging(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_default_log_dir_is_not_empty() {
        let dir = resolve_log_dir(None);
        assert!(!dir.as_os_str().is_empty());
    }
}
