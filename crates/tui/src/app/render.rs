//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Lay out top bar, content area, side menu and recommended bar
//! - Overlay toasts and the active popup
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::app::state::{RECOMMENDED_BAR_HEIGHT, TOP_BAR_HEIGHT};
use crate::ui::chrome::{render_recommended_bar, render_top_bar};
use crate::ui::content::render_content;
use crate::ui::menu::render_menu;
use crate::ui::popup::render_popup;
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(RECOMMENDED_BAR_HEIGHT),
            ])
            .split(f.area());

        render_top_bar(f, self, chunks[0]);
        render_content(f, self, chunks[1]);
        if self.menu.is_visible() {
            render_menu(f, self, chunks[1]);
        }
        render_recommended_bar(f, self, chunks[2]);

        render_toasts(f, &self.toasts, &self.theme);

        if let Some(popup) = &self.popup {
            render_popup(f, popup, &self.theme, self);
        }
    }
}
