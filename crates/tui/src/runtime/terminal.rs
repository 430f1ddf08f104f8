//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen.
//! - Ensure terminal state is restored on application exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing (see `App::render`).
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Guard that restores the terminal when dropped.
///
/// `restore` runs on normal exit; the Drop impl is the fallback for
/// panics and early returns.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode and return the guard with a terminal.
    pub fn enter() -> io::Result<(Self, Terminal<CrosstermBackend<Stdout>>)> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        // Build the guard before anything else can fail so raw mode is undone.
        let guard = Self { restored: false };
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }

    /// Leave the alternate screen and raw mode, reporting errors.
    pub fn restore(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        self.restored = true;
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Errors are ignored; we're in drop and must not panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
