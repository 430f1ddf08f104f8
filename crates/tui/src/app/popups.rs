//! Popup input handling for the TUI app.
//!
//! Responsibilities:
//! - Handle keyboard input when popups are active
//! - Drive the tutorial overlay and the color picker
//!
//! Non-responsibilities:
//! - Does NOT render popups (handled by ui::popup module)
//! - Does NOT define popup types (handled by ui::popup module)

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::collaborators::Rgb;
use crate::command::Command;
use crate::tutorial::TutorialControl;
use crate::ui::popup::{ABOUT_BUTTONS, PopupType};

impl App {
    /// Handle keyboard input when a popup is active.
    pub fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        let kind = self.popup.as_ref().map(|p| p.kind.clone())?;

        match kind {
            PopupType::Info | PopupType::Error => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ') => {
                    Some(Action::ClosePopup)
                }
                _ => None,
            },
            PopupType::About { selected } => self.handle_about_input(key, selected),
            PopupType::Tutorial => self.handle_tutorial_input(key),
            PopupType::ColorPicker => self.handle_color_picker_input(key),
        }
    }

    fn handle_about_input(&mut self, key: KeyEvent, selected: usize) -> Option<Action> {
        let count = ABOUT_BUTTONS.len();
        let move_to = |app: &mut Self, selected: usize| -> Option<Action> {
            if let Some(popup) = app.popup.as_mut() {
                popup.kind = PopupType::About { selected };
            }
            None
        };

        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                move_to(self, (selected + 1) % count)
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                move_to(self, (selected + count - 1) % count)
            }
            KeyCode::Enter if selected == 0 => {
                self.popup = None;
                Some(Action::Run(Command::StartTutorial))
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClosePopup),
            _ => None,
        }
    }

    fn handle_tutorial_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => {
                match self.tutorial.control() {
                    Some(TutorialControl::Next) => self.tutorial.advance().map(Action::Run),
                    Some(TutorialControl::Close) | None => Some(Action::ClosePopup),
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClosePopup),
            _ => None,
        }
    }

    fn handle_color_picker_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => match self.color_input.value().parse::<Rgb>() {
                Ok(color) => {
                    self.popup = None;
                    self.color_error = None;
                    Some(Action::Run(Command::ApplyBackgroundColor(color)))
                }
                Err(e) => {
                    self.color_error = Some(e.to_string());
                    None
                }
            },
            KeyCode::Esc => Some(Action::ClosePopup),
            _ => {
                self.color_input.handle_key(key);
                None
            }
        }
    }
}
