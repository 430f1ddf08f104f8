//! Runtime components for the settings simulator.
//!
//! This module contains the runtime infrastructure around the app:
//! - Terminal management (TerminalGuard)
//! - File logging setup
//! - The keyboard input pump
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `settings_tui::app` and `settings_tui::ui`).
//! - Timelines (see `settings_tui::animation`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod input;
pub mod logging;
pub mod terminal;
