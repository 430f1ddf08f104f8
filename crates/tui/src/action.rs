//! Action protocol for the event loop.
//!
//! Actions flow through one bounded channel from the input task and the
//! animation tasks to `App::update`, which is the only place state changes.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine in `App`)
//! - Task execution (handled by `animation::Scheduler`)

use crossterm::event::KeyEvent;

use crate::animation::{Resource, VisualState};
use crate::command::Command;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Terminal resized (width, height)
    Resize(u16, u16),
    /// Periodic UI tick (toast pruning)
    Tick,

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Execute a user-level command
    Run(Command),
    /// Submit a search query
    Search(String),

    // Animation
    /// A timeline applied its next visual state
    TimelineStep {
        resource: Resource,
        generation: u64,
        state: VisualState,
    },
    /// A timeline held its last state and is done
    TimelineFinished {
        resource: Resource,
        generation: u64,
        on_complete: Option<Command>,
    },

    // Popups
    /// Dismiss the open popup
    ClosePopup,
}
