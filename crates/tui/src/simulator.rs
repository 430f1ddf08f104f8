//! Simulated long-running operations.
//!
//! A simulated task publishes an intermediate label right away, waits, then
//! publishes a final label. The wait is a one-step timeline on the scheduler,
//! so a second run on the same resource supersedes the first.

use std::time::Duration;

use settings_config::constants::{UPDATE_CHECKING_LABEL, UPDATE_DONE_LABEL};

use crate::animation::{Timeline, TimelineStep, VisualState};

/// Intermediate label, delay, final label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTask {
    pub intermediate: String,
    pub final_state: String,
    pub delay: Duration,
}

impl SimulatedTask {
    pub fn new(
        intermediate: impl Into<String>,
        final_state: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            intermediate: intermediate.into(),
            final_state: final_state.into(),
            delay,
        }
    }

    /// The "Check for Updates" operation.
    pub fn update_check(delay: Duration) -> Self {
        Self::new(UPDATE_CHECKING_LABEL, UPDATE_DONE_LABEL, delay)
    }

    /// Hold the intermediate label for `delay`, then show the final one.
    ///
    /// The caller publishes `intermediate` itself before scheduling, so the
    /// label is visible before the first timeline message arrives.
    pub fn timeline(&self) -> Timeline {
        Timeline::new(vec![
            TimelineStep::new(VisualState::Status(self.intermediate.clone()), self.delay),
            TimelineStep::new(VisualState::Status(self.final_state.clone()), Duration::ZERO),
        ])
    }
}
