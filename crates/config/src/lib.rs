//! Configuration management for the settings simulator.
//!
//! This crate provides the timing knobs, color theme and loaders used by the
//! terminal front end. Values come from built-in defaults, an optional `.env`
//! file, environment variables and finally explicit builder overrides.

pub mod constants;
mod loader;
pub mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{SimConfig, Theme, TimingConfig};
