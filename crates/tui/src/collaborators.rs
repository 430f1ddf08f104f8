//! External collaborators the simulator talks to.
//!
//! Responsibilities:
//! - Define the seams to the host system: user identity, wall clock, and the
//!   desktop background setter.
//! - Provide default implementations used by the binary.
//! - Parse and format `#rrggbb` colors.
//!
//! Does NOT handle:
//! - Reporting failures to the user (the app turns `ApplyError` into a popup).
//!
//! Invariants:
//! - Collaborator calls are synchronous and never panic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("color must have exactly 6 hex digits (got {0})")]
    WrongLength(usize),
    #[error("invalid hex digit in '{0}'")]
    InvalidHex(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::WrongLength(digits.chars().count()));
        }
        // from_str_radix tolerates a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(digits.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(digits.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Failure reported by the desktop when a setting cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to apply background color {color}: {reason}")]
pub struct ApplyError {
    pub color: Rgb,
    pub reason: String,
}

/// Source of the current user's display name.
#[cfg_attr(test, mockall::automock)]
pub trait UserIdentity: Send + Sync {
    fn display_name(&self) -> String;
}

/// Source of the current time, date and time zone.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Time formatted `HH:MM:SS`.
    fn time(&self) -> String;
    /// Date formatted `YYYY-MM-DD`.
    fn date(&self) -> String;
    fn time_zone(&self) -> String;
}

/// Applies a background color to the desktop.
#[cfg_attr(test, mockall::automock)]
pub trait DesktopBackground: Send + Sync {
    fn set_color(&self, color: Rgb) -> Result<(), ApplyError>;
}

/// Environment variables consulted for the user name, in order.
pub const USER_NAME_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Reads the user name from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvUserIdentity;

impl UserIdentity for EnvUserIdentity {
    fn display_name(&self) -> String {
        USER_NAME_VARS
            .iter()
            .find_map(|var| settings_config::env_var_or_none(var))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }

    fn date(&self) -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    fn time_zone(&self) -> String {
        // chrono has no zone names for `Local`; the UTC offset is the best label.
        format!("UTC{}", chrono::Local::now().format("%:z"))
    }
}

/// Desktop stand-in that records the last applied color.
#[derive(Debug, Default)]
pub struct SimulatedDesktop {
    current: Mutex<Option<Rgb>>,
}

impl SimulatedDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last color applied, if any.
    pub fn current(&self) -> Option<Rgb> {
        self.current.lock().ok().and_then(|guard| *guard)
    }
}

impl DesktopBackground for SimulatedDesktop {
    fn set_color(&self, color: Rgb) -> Result<(), ApplyError> {
        let mut guard = self.current.lock().map_err(|_| ApplyError {
            color,
            reason: "desktop state poisoned".to_string(),
        })?;
        *guard = Some(color);
        tracing::info!(%color, "Desktop background changed");
        Ok(())
    }
}
