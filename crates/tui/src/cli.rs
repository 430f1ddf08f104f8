//! Command-line argument parsing for settings-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `settings_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Overrides here win over `.env` and environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for settings-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --update-check-ms)
/// 2. Environment variables (e.g., SETTINGS_SIM_UPDATE_CHECK_MS)
/// 3. `.env` file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "settings-tui",
    about = "Terminal simulator of a desktop settings panel",
    version,
    after_help = "Examples:\n  settings-tui\n  settings-tui --log-dir /tmp/settings-logs\n  settings-tui --update-check-ms 1500 --flash-cycles 5\n"
)]
pub struct Cli {
    /// Directory for log files (defaults to the per-user data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Delay of the simulated update check, in milliseconds
    #[arg(long)]
    pub update_check_ms: Option<u64>,

    /// Number of highlight flashes before a search navigates
    #[arg(long)]
    pub flash_cycles: Option<u32>,

    /// Mark the tutorial as already completed
    #[arg(long)]
    pub skip_tutorial: bool,
}
