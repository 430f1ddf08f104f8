//! Configuration type definitions for the settings simulator.
//!
//! Responsibilities:
//! - Define the timing knobs driving animations and simulated operations.
//! - Define the runtime color theme.
//! - Bundle both into the fully resolved `SimConfig`.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Rendering (see the TUI crate).

mod theme;
mod timing;

pub use theme::Theme;
pub use timing::TimingConfig;

/// Fully resolved configuration handed to the application at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimConfig {
    /// Durations and step sizes for animations and simulated tasks.
    pub timing: TimingConfig,
    /// Runtime color palette.
    pub theme: Theme,
}
