//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SETTINGS_SIM_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Validating ranges (see `ConfigLoader::build`).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparseable numeric values return ConfigError::InvalidValue.

use std::str::FromStr;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_UPDATE_CHECK_MS: &str = "SETTINGS_SIM_UPDATE_CHECK_MS";
pub const ENV_FLASH_HOLD_MS: &str = "SETTINGS_SIM_FLASH_HOLD_MS";
pub const ENV_FLASH_CYCLES: &str = "SETTINGS_SIM_FLASH_CYCLES";
pub const ENV_MENU_STEP: &str = "SETTINGS_SIM_MENU_STEP";
pub const ENV_MENU_TICK_MS: &str = "SETTINGS_SIM_MENU_TICK_MS";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(ms) = parse_env::<u64>(ENV_UPDATE_CHECK_MS, "must be a number of milliseconds")? {
        loader.set_update_check_ms(Some(ms));
    }
    if let Some(ms) = parse_env::<u64>(ENV_FLASH_HOLD_MS, "must be a number of milliseconds")? {
        loader.set_flash_hold_ms(Some(ms));
    }
    if let Some(cycles) = parse_env::<u32>(ENV_FLASH_CYCLES, "must be a positive integer")? {
        loader.set_flash_cycles(Some(cycles));
    }
    if let Some(step) = parse_env::<u16>(ENV_MENU_STEP, "must be a positive integer")? {
        loader.set_menu_step(Some(step));
    }
    if let Some(ms) = parse_env::<u64>(ENV_MENU_TICK_MS, "must be a number of milliseconds")? {
        loader.set_menu_tick_ms(Some(ms));
    }
    Ok(())
}
