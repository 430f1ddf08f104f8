//! Cooperative animation driver.
//!
//! Responsibilities:
//! - Describe timed sequences of visual-state changes (`Timeline`).
//! - Run them on the tokio runtime without blocking the UI loop (`Scheduler`).
//! - Build the slide-menu and search-flash timelines (`menu`, `flash`).
//!
//! Does NOT handle:
//! - Applying visual states (the app does that when it receives
//!   `Action::TimelineStep`).
//!
//! Invariants:
//! - At most one timeline runs per `Resource`; starting another supersedes it.
//! - A superseded timeline applies no further states and never completes.
//! - A completion command fires exactly once per finished timeline.

mod flash;
mod menu;
mod scheduler;

pub use flash::{Backdrop, flash_timeline};
pub use menu::MenuState;
pub use scheduler::{Scheduler, Started};

use std::time::Duration;

use crate::command::Command;

/// Something a timeline animates. Each resource runs one timeline at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Menu,
    ContentBackground,
    UpdateStatus,
}

/// A visual state applied by one timeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualState {
    MenuOffset(i32),
    Background(Backdrop),
    Status(String),
}

/// A state and how long to hold it before the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub state: VisualState,
    pub hold: Duration,
}

impl TimelineStep {
    pub fn new(state: VisualState, hold: Duration) -> Self {
        Self { state, hold }
    }
}

/// Ordered steps plus an optional command fired after the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    pub steps: Vec<TimelineStep>,
    pub on_complete: Option<Command>,
}

impl Timeline {
    pub fn new(steps: Vec<TimelineStep>) -> Self {
        Self {
            steps,
            on_complete: None,
        }
    }

    pub fn then(mut self, command: Command) -> Self {
        self.on_complete = Some(command);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all hold durations.
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.hold).sum()
    }
}
