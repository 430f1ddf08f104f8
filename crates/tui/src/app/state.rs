//! Application state types and layout constants.
//!
//! Responsibilities:
//! - Define which region has keyboard focus (`Focus`)
//! - Define the side-menu and recommended-bar entries
//! - Define layout constants shared by the renderers
//!
//! Does NOT handle:
//! - State mutations (in App impl)

use crate::command::Command;
use crate::screen::ScreenId;

/// Height of the top bar (title, search, buttons).
pub const TOP_BAR_HEIGHT: u16 = 2;

/// Height of the recommended bar at the bottom.
pub const RECOMMENDED_BAR_HEIGHT: u16 = 2;

/// Width of the fully open side menu, in columns.
pub const MENU_WIDTH: u16 = 30;

/// Recommended shortcuts, bound to F1..F7 in this order.
pub const RECOMMENDED_ITEMS: [&str; 7] = [
    "Lock Screen",
    "Sounds",
    "Mouse",
    "Pointer",
    "Touch",
    "Bluetooth",
    "Personalize",
];

/// Categories listed in the side menu, in display order.
pub const MENU_CATEGORIES: [&str; 10] = [
    "System",
    "Bluetooth & Devices",
    "Network & Internet",
    "Personalized Apps",
    "Accounts",
    "Time & Language",
    "Gaming",
    "Activities",
    "Privacy & Security",
    "Windows Update",
];

/// Rows of the side menu: the close button followed by each category.
pub fn side_menu_entries() -> Vec<(&'static str, Command)> {
    std::iter::once(("⬅ Close Menu", Command::ToggleMenu))
        .chain(
            MENU_CATEGORIES
                .iter()
                .map(|label| (*label, Command::NavigateTo(ScreenId::from_label(label)))),
        )
        .collect()
}

/// Region receiving key presses when no popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Content-area buttons
    #[default]
    Content,
    /// Top-bar search field
    Search,
    /// Side menu rows
    Menu,
}
