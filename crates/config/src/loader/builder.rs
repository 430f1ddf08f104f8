//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Validate and build the final `SimConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, regardless of call order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    MAX_FLASH_CYCLES, MAX_FLASH_HOLD_MS, MAX_MENU_TICK_MS, MAX_UPDATE_CHECK_MS, MENU_CLOSED_OFFSET,
    MENU_OPEN_OFFSET,
};
use crate::types::{SimConfig, Theme, TimingConfig};

/// Configuration loader that builds config from defaults, environment and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    update_check_ms: Option<u64>,
    flash_hold_ms: Option<u64>,
    flash_cycles: Option<u32>,
    menu_step: Option<u16>,
    menu_tick_ms: Option<u64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Values already set through `with_*` methods are kept.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the simulated update check duration.
    pub fn with_update_check_ms(mut self, ms: u64) -> Self {
        self.update_check_ms = Some(ms);
        self
    }

    /// Override the hold time of each flash state.
    pub fn with_flash_hold_ms(mut self, ms: u64) -> Self {
        self.flash_hold_ms = Some(ms);
        self
    }

    /// Override the number of flash cycles.
    pub fn with_flash_cycles(mut self, cycles: u32) -> Self {
        self.flash_cycles = Some(cycles);
        self
    }

    /// Override the menu step size.
    pub fn with_menu_step(mut self, step: u16) -> Self {
        self.menu_step = Some(step);
        self
    }

    /// Override the menu tick duration.
    pub fn with_menu_tick_ms(mut self, ms: u64) -> Self {
        self.menu_tick_ms = Some(ms);
        self
    }

    // Environment setters only fill values that no builder method provided.

    pub(crate) fn set_update_check_ms(&mut self, ms: Option<u64>) {
        if self.update_check_ms.is_none() {
            self.update_check_ms = ms;
        }
    }

    pub(crate) fn set_flash_hold_ms(&mut self, ms: Option<u64>) {
        if self.flash_hold_ms.is_none() {
            self.flash_hold_ms = ms;
        }
    }

    pub(crate) fn set_flash_cycles(&mut self, cycles: Option<u32>) {
        if self.flash_cycles.is_none() {
            self.flash_cycles = cycles;
        }
    }

    pub(crate) fn set_menu_step(&mut self, step: Option<u16>) {
        if self.menu_step.is_none() {
            self.menu_step = step;
        }
    }

    pub(crate) fn set_menu_tick_ms(&mut self, ms: Option<u64>) {
        if self.menu_tick_ms.is_none() {
            self.menu_tick_ms = ms;
        }
    }

    /// Validate collected values and build the final configuration.
    pub fn build(self) -> Result<SimConfig, ConfigError> {
        let defaults = TimingConfig::default();

        let update_check = match self.update_check_ms {
            Some(ms) if ms > MAX_UPDATE_CHECK_MS => {
                return Err(ConfigError::InvalidUpdateCheck {
                    message: format!("must be at most {MAX_UPDATE_CHECK_MS} ms (got {ms})"),
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.update_check,
        };

        let flash_hold = match self.flash_hold_ms {
            Some(ms) if ms > MAX_FLASH_HOLD_MS => {
                return Err(ConfigError::InvalidFlash {
                    message: format!("hold must be at most {MAX_FLASH_HOLD_MS} ms (got {ms})"),
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.flash_hold,
        };

        let flash_cycles = match self.flash_cycles {
            Some(cycles) if cycles == 0 || cycles > MAX_FLASH_CYCLES => {
                return Err(ConfigError::InvalidFlash {
                    message: format!("cycles must be between 1 and {MAX_FLASH_CYCLES} (got {cycles})"),
                });
            }
            Some(cycles) => cycles,
            None => defaults.flash_cycles,
        };

        let travel = (MENU_OPEN_OFFSET - MENU_CLOSED_OFFSET) as u16;
        let menu_step = match self.menu_step {
            Some(step) if step == 0 || step > travel => {
                return Err(ConfigError::InvalidMenu {
                    message: format!("step must be between 1 and {travel} (got {step})"),
                });
            }
            Some(step) => step,
            None => defaults.menu_step,
        };

        let menu_tick = match self.menu_tick_ms {
            Some(ms) if ms > MAX_MENU_TICK_MS => {
                return Err(ConfigError::InvalidMenu {
                    message: format!("tick must be at most {MAX_MENU_TICK_MS} ms (got {ms})"),
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.menu_tick,
        };

        let timing = TimingConfig {
            update_check,
            flash_hold,
            flash_cycles,
            menu_step,
            menu_tick,
        };
        tracing::debug!(?timing, "Configuration resolved");

        Ok(SimConfig {
            timing,
            theme: Theme::default(),
        })
    }
}
