//! Timing configuration for animations and simulated operations.

use std::time::Duration;

use crate::constants::{
    DEFAULT_FLASH_CYCLES, DEFAULT_FLASH_HOLD_MS, DEFAULT_MENU_STEP, DEFAULT_MENU_TICK_MS,
    DEFAULT_UPDATE_CHECK_MS,
};

/// Durations and step sizes used by the animation scheduler and the
/// simulated update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// How long the simulated "check for updates" waits before finishing.
    pub update_check: Duration,
    /// Hold time of each highlight/normal state of the search flash.
    pub flash_hold: Duration,
    /// Number of highlight/normal cycles in one search flash.
    pub flash_cycles: u32,
    /// Offset units the side menu moves per tick.
    pub menu_step: u16,
    /// Hold time of each side menu tick.
    pub menu_tick: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            update_check: Duration::from_millis(DEFAULT_UPDATE_CHECK_MS),
            flash_hold: Duration::from_millis(DEFAULT_FLASH_HOLD_MS),
            flash_cycles: DEFAULT_FLASH_CYCLES,
            menu_step: DEFAULT_MENU_STEP,
            menu_tick: Duration::from_millis(DEFAULT_MENU_TICK_MS),
        }
    }
}
