//! Screen identifiers and navigation state.
//!
//! Responsibilities:
//! - Define the `ScreenId` lookup key and its display labels.
//! - Define the parameters a screen may be rendered with.
//! - Define the `NavigationState` owned by the navigation controller.
//!
//! Does NOT handle:
//! - Rendering (see `view`).
//! - Transition logic (see `navigation`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    Home,
    System,
    Display,
    BluetoothDevices,
    WindowsUpdate,
    Accounts,
    NetworkInternet,
    TimeLanguage,
    Gaming,
    Activities,
    PrivacySecurity,
    /// Any screen known only by name.
    Generic(String),
}

impl ScreenId {
    /// Human-readable label, as shown in headings and menus.
    pub fn label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::System => "System",
            Self::Display => "Display",
            Self::BluetoothDevices => "Bluetooth & Devices",
            Self::WindowsUpdate => "Windows Update",
            Self::Accounts => "Accounts",
            Self::NetworkInternet => "Network & Internet",
            Self::TimeLanguage => "Time & Language",
            Self::Gaming => "Gaming",
            Self::Activities => "Activities",
            Self::PrivacySecurity => "Privacy & Security",
            Self::Generic(name) => name,
        }
    }

    /// Map a label back to its screen, falling back to `Generic`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Home" => Self::Home,
            "System" => Self::System,
            "Display" => Self::Display,
            "Bluetooth & Devices" => Self::BluetoothDevices,
            "Windows Update" => Self::WindowsUpdate,
            "Accounts" => Self::Accounts,
            "Network & Internet" => Self::NetworkInternet,
            "Time & Language" => Self::TimeLanguage,
            "Gaming" => Self::Gaming,
            "Activities" => Self::Activities,
            "Privacy & Security" => Self::PrivacySecurity,
            other => Self::Generic(other.to_string()),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra data a screen is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenParams {
    #[default]
    None,
    /// A system-feature sub-page (e.g. "Sound") shown inside the System screen.
    Feature(String),
}

/// The single live description of what the content area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: ScreenId,
    pub params: ScreenParams,
}

impl NavigationState {
    pub fn new(screen: ScreenId, params: ScreenParams) -> Self {
        Self { screen, params }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ScreenId::Home, ScreenParams::None)
    }
}
