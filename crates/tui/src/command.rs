//! User-level commands expressed as data.
//!
//! Buttons, menu items, search entries and tutorial steps all carry a
//! `Command`; the app interprets it in `App::execute`. Keeping commands as
//! plain values lets tables of them be compared in tests and logged.

use serde::{Deserialize, Serialize};

use crate::collaborators::Rgb;
use crate::screen::ScreenId;

/// An action the user can trigger, independent of how it was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Command {
    /// Show a screen with default parameters.
    NavigateTo(ScreenId),
    /// Open a system feature page ("Display", "Sound", ...).
    OpenSystemFeature(String),
    /// Slide the side menu open or closed.
    ToggleMenu,
    /// Start the simulated update check.
    CheckForUpdates,
    /// Open the background color picker.
    ChangeBackgroundColor,
    /// Apply a color through the desktop collaborator.
    ApplyBackgroundColor(Rgb),
    /// Open one of the recommended-bar shortcuts.
    OpenRecommended(String),
    /// Open the "About Settings" dialog.
    OpenAbout,
    /// Start the guided tutorial.
    StartTutorial,
}
