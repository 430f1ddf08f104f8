//! Theme types for the settings simulator.
//!
//! Responsibilities:
//! - Define the runtime `Theme` with all color values.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - Colors are semantically named (error/warn/info) for consistent usage.
//! - `Theme` is intentionally NOT serializable; there is nothing to persist.

use ratatui::style::Color;

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,

    // Top bar
    pub top_bar_bg: Color,
    pub top_bar_fg: Color,

    // Content area
    pub content_bg: Color,
    pub flash_bg: Color,

    // Side menu and recommended bar
    pub menu_bg: Color,
    pub recommended_bg: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0xf0, 0xf0, 0xf0),
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            title: Color::Rgb(0x00, 0x78, 0xd7),

            top_bar_bg: Color::Rgb(0x00, 0x78, 0xd7),
            top_bar_fg: Color::White,

            content_bg: Color::White,
            flash_bg: Color::Rgb(0xcc, 0xe7, 0xff),

            menu_bg: Color::Rgb(0xe6, 0xe6, 0xe6),
            recommended_bg: Color::Rgb(0xe0, 0xe0, 0xe0),

            highlight_fg: Color::White,
            highlight_bg: Color::Rgb(0x00, 0x78, 0xd7),

            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
        }
    }
}
