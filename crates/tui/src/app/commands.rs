//! Command execution for the TUI app.
//!
//! Responsibilities:
//! - Interpret a `Command` against app state
//! - Route every screen change through the navigator
//! - Start timelines for the menu slide, search flash and update check
//!
//! Non-responsibilities:
//! - Does NOT decide which command a key maps to (see `input`)

use crate::animation::{Resource, Started, Timeline, flash_timeline};
use crate::app::{App, Focus};
use crate::collaborators::Rgb;
use crate::command::Command;
use crate::screen::{ScreenId, ScreenParams};
use crate::search::SearchOutcome;
use crate::simulator::SimulatedTask;
use crate::tutorial::{StartOutcome, TUTORIAL_ALREADY_COMPLETED_MESSAGE};
use crate::ui::Toast;
use crate::ui::popup::{Popup, PopupType};
use crate::view::RenderContext;

impl App {
    /// Carry out a user-level command.
    pub fn execute(&mut self, command: Command) {
        tracing::debug!(?command, "Executing command");
        match command {
            Command::NavigateTo(screen) => self.navigate_to(screen, ScreenParams::None),
            Command::OpenSystemFeature(name) => self.open_system_feature(name),
            Command::ToggleMenu => self.toggle_menu(),
            Command::CheckForUpdates => {
                self.run_simulated_task(SimulatedTask::update_check(self.timing.update_check))
            }
            Command::ChangeBackgroundColor => self.open_color_picker(),
            Command::ApplyBackgroundColor(color) => self.apply_background_color(color),
            Command::OpenRecommended(item) => {
                let message = format!("{item} settings opened (simulated)");
                self.popup = Some(Popup::info(item, message));
            }
            Command::OpenAbout => {
                self.popup = Some(Popup::builder(PopupType::About { selected: 0 }).build());
            }
            Command::StartTutorial => self.start_tutorial(),
        }
    }

    /// Replace the content area with `screen`.
    pub fn navigate_to(&mut self, screen: ScreenId, params: ScreenParams) {
        let ctx = RenderContext::new(self.identity.as_ref(), self.clock.as_ref());
        self.navigator.navigate_to(&ctx, screen, params);
    }

    fn open_system_feature(&mut self, name: String) {
        if name == "Display" {
            self.navigate_to(ScreenId::Display, ScreenParams::None);
        } else {
            self.navigate_to(ScreenId::System, ScreenParams::Feature(name));
        }
    }

    fn toggle_menu(&mut self) {
        let timeline = self
            .menu
            .toggle(self.timing.menu_step, self.timing.menu_tick);
        self.focus = if self.menu.is_open() {
            self.menu_selected = 0;
            Focus::Menu
        } else {
            Focus::Content
        };
        self.run_timeline(Resource::Menu, timeline);
    }

    /// Look `query` up and either flash-then-navigate or notify a miss.
    pub fn submit_search(&mut self, query: &str) {
        match self.search.lookup(query) {
            SearchOutcome::Matched { command, .. } => {
                let timeline =
                    flash_timeline(self.timing.flash_cycles, self.timing.flash_hold, command);
                self.run_timeline(Resource::ContentBackground, timeline);
            }
            SearchOutcome::NoMatch { query } => {
                self.toasts
                    .push(Toast::info(SearchOutcome::no_match_message(&query)));
            }
        }
    }

    /// Publish the intermediate label now and the final one after the delay.
    pub fn run_simulated_task(&mut self, task: SimulatedTask) {
        tracing::info!(delay_ms = task.delay.as_millis() as u64, "Simulated task started");
        self.update_status = task.intermediate.clone();
        self.run_timeline(Resource::UpdateStatus, task.timeline());
    }

    fn run_timeline(&mut self, resource: Resource, timeline: Timeline) {
        if let Started::Completed(Some(command)) = self.scheduler.run_timeline(resource, timeline) {
            self.execute(command);
        }
    }

    fn open_color_picker(&mut self) {
        self.color_input.clear();
        self.color_error = None;
        self.popup = Some(Popup::builder(PopupType::ColorPicker).build());
    }

    fn apply_background_color(&mut self, color: Rgb) {
        match self.desktop.set_color(color) {
            Ok(()) => {
                self.popup = Some(Popup::info(
                    "Background",
                    format!("Background color changed to {color}"),
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Applying background color failed");
                self.toasts
                    .push(Toast::warning(format!("Background color {} was not applied", e.color)));
                self.popup = Some(Popup::error(e.to_string()));
            }
        }
    }

    fn start_tutorial(&mut self) {
        match self.tutorial.start() {
            StartOutcome::Started | StartOutcome::AlreadyOpen => {
                self.popup = Some(Popup::builder(PopupType::Tutorial).build());
            }
            StartOutcome::AlreadyCompleted => {
                self.popup = Some(Popup::info("Tutorial", TUTORIAL_ALREADY_COMPLETED_MESSAGE));
            }
        }
    }
}
