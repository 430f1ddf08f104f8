//! Path helpers for runtime file locations.
//!
//! Responsibilities:
//! - Determine the platform-appropriate default log directory.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations (the binary creates the directory).

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default directory for log files.
///
/// - Linux: `~/.local/share/settings-tui/logs`
/// - macOS: `~/Library/Application Support/settings-tui/logs`
/// - Windows: `%LocalAppData%\settings-tui\data\logs`
pub fn default_log_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "settings-tui")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_local_dir().join("logs"))
}
