//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `state`: Layout constants, focus, side-menu and recommended-bar entries
//! - `context`: The collaborators and settings the app is built from
//! - `actions`: Action handling (`App::update`)
//! - `commands`: Command execution (`App::execute`)
//! - `input`: Key handling outside popups
//! - `popups`: Key handling inside popups
//! - `render`: Rendering logic

mod actions;
mod commands;
mod context;
mod input;
mod popups;
mod render;
pub mod state;

pub use context::AppContext;
pub use state::{
    Focus, MENU_WIDTH, RECOMMENDED_BAR_HEIGHT, RECOMMENDED_ITEMS, TOP_BAR_HEIGHT,
    side_menu_entries,
};

use std::sync::Arc;

use settings_config::constants::UPDATE_DONE_LABEL;
use settings_config::{Theme, TimingConfig};

use crate::animation::{Backdrop, MenuState, Scheduler};
use crate::collaborators::{Clock, DesktopBackground, UserIdentity};
use crate::navigation::Navigator;
use crate::search::SearchDispatcher;
use crate::tutorial::TutorialSequencer;
use crate::ui::popup::Popup;
use crate::ui::{SingleLineInput, Toast};
use crate::view::{RenderContext, ViewRegistry};

/// Main application state.
///
/// Owned by the event loop, which is the only writer.
pub struct App {
    pub navigator: Navigator,
    pub search: SearchDispatcher,
    pub tutorial: TutorialSequencer,
    pub menu: MenuState,
    /// Highlighted row of the side menu
    pub menu_selected: usize,
    pub backdrop: Backdrop,
    /// Label of the Windows Update status line
    pub update_status: String,
    pub popup: Option<Popup>,
    pub toasts: Vec<Toast>,
    pub focus: Focus,
    pub search_input: SingleLineInput,
    pub color_input: SingleLineInput,
    /// Validation message shown inside the color picker
    pub color_error: Option<String>,
    pub theme: Theme,
    pub should_quit: bool,

    timing: TimingConfig,
    scheduler: Scheduler,
    identity: Arc<dyn UserIdentity>,
    clock: Arc<dyn Clock>,
    desktop: Arc<dyn DesktopBackground>,
}

impl App {
    /// Build the app from its context, showing the Home screen.
    pub fn new(ctx: AppContext) -> Self {
        let AppContext {
            scheduler,
            identity,
            clock,
            desktop,
            progress,
            timing,
            theme,
        } = ctx;

        let navigator = Navigator::new(
            ViewRegistry::with_default_screens(),
            &RenderContext::new(identity.as_ref(), clock.as_ref()),
        );

        Self {
            navigator,
            search: SearchDispatcher::default(),
            tutorial: TutorialSequencer::with_default_script(progress),
            menu: MenuState::default(),
            menu_selected: 0,
            backdrop: Backdrop::Normal,
            update_status: UPDATE_DONE_LABEL.to_string(),
            popup: None,
            toasts: Vec::new(),
            focus: Focus::Content,
            search_input: SingleLineInput::with_placeholder("Search settings (/)"),
            color_input: SingleLineInput::with_placeholder("#0078d7"),
            color_error: None,
            theme,
            should_quit: false,
            timing,
            scheduler,
            identity,
            clock,
            desktop,
        }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Cancel running timelines; used on shutdown.
    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
    }
}
