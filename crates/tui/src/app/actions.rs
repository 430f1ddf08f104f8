//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Apply timeline steps, dropping those from superseded timelines
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers and timelines)
//! - Does NOT perform async operations

use crate::action::Action;
use crate::animation::{Resource, VisualState};
use crate::app::App;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
            }
            Action::Tick => self.toasts.retain(|t| !t.is_expired()),
            Action::Input(key) => {
                if let Some(a) = self.handle_input(key) {
                    self.update(a);
                }
            }
            Action::Run(command) => self.execute(command),
            Action::Search(query) => self.submit_search(&query),
            Action::TimelineStep {
                resource,
                generation,
                state,
            } => self.apply_timeline_step(resource, generation, state),
            Action::TimelineFinished {
                resource,
                generation,
                on_complete,
            } => {
                if self.scheduler.finish(resource, generation) {
                    tracing::debug!(?resource, generation, "Timeline finished");
                    if let Some(command) = on_complete {
                        self.execute(command);
                    }
                } else {
                    tracing::debug!(?resource, generation, "Ignoring stale timeline completion");
                }
            }
            Action::ClosePopup => self.close_popup(),
        }
    }

    fn apply_timeline_step(&mut self, resource: Resource, generation: u64, state: VisualState) {
        if !self.scheduler.is_current(resource, generation) {
            tracing::debug!(?resource, generation, "Ignoring stale timeline step");
            return;
        }
        match state {
            VisualState::MenuOffset(offset) => self.menu.set_offset(offset),
            VisualState::Background(backdrop) => self.backdrop = backdrop,
            VisualState::Status(label) => self.update_status = label,
        }
    }

    /// Dismiss the open popup, ending a tutorial session if it was showing one.
    pub fn close_popup(&mut self) {
        self.popup = None;
        self.tutorial.close();
    }
}
