//! Centralized constants for the settings simulator workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Event Loop Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds (toast pruning, redraws).
pub const DEFAULT_UI_TICK_MS: u64 = 100;

// =============================================================================
// Simulated Operations
// =============================================================================

/// Default duration of the simulated "check for updates" in milliseconds.
pub const DEFAULT_UPDATE_CHECK_MS: u64 = 5000;

/// Maximum allowed duration of the simulated update check (1 minute).
pub const MAX_UPDATE_CHECK_MS: u64 = 60_000;

/// Status label shown while the update check is running.
pub const UPDATE_CHECKING_LABEL: &str = "Checking for updates...";

/// Status label shown when no update check is running.
pub const UPDATE_DONE_LABEL: &str = "You're up to date ✅";

// =============================================================================
// Search Flash Animation
// =============================================================================

/// Default hold time of each flash state in milliseconds.
pub const DEFAULT_FLASH_HOLD_MS: u64 = 100;

/// Maximum allowed flash hold time in milliseconds.
pub const MAX_FLASH_HOLD_MS: u64 = 2000;

/// Default number of highlight/normal cycles per search flash.
pub const DEFAULT_FLASH_CYCLES: u32 = 3;

/// Maximum allowed number of flash cycles.
pub const MAX_FLASH_CYCLES: u32 = 10;

// =============================================================================
// Slide Menu
// =============================================================================

/// Menu offset when fully closed (hidden to the left of the content area).
pub const MENU_CLOSED_OFFSET: i32 = -250;

/// Menu offset when fully open.
pub const MENU_OPEN_OFFSET: i32 = 0;

/// Default number of offset units the menu moves per tick.
pub const DEFAULT_MENU_STEP: u16 = 10;

/// Default hold time per menu tick in milliseconds.
pub const DEFAULT_MENU_TICK_MS: u64 = 10;

/// Maximum allowed menu tick in milliseconds.
pub const MAX_MENU_TICK_MS: u64 = 1000;
