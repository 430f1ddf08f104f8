//! Key handling for the TUI app.
//!
//! Responsibilities:
//! - Map key presses to Actions based on popup and focus
//! - Edit the search field while it has focus
//!
//! Non-responsibilities:
//! - Does NOT mutate state beyond focus, selection and text fields
//!
//! Keys:
//! - `/` search, `Enter` run, `Esc` leave
//! - `m` menu, `a` About, `h` Home, `q` / `Ctrl+C` quit
//! - `Up` / `Down` / `Tab` move the selection, `Enter` activates it
//! - `F1`..`F7` recommended shortcuts

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::{App, Focus, RECOMMENDED_ITEMS, side_menu_entries};
use crate::command::Command;
use crate::screen::ScreenId;

impl App {
    /// Translate a key press into an action, if it maps to one.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }

        match self.focus {
            Focus::Search => self.handle_search_input(key),
            Focus::Menu => self.handle_menu_input(key),
            Focus::Content => self.handle_content_input(key),
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => {
                self.focus = Focus::Content;
                Some(Action::Search(self.search_input.take()))
            }
            KeyCode::Esc => {
                self.focus = Focus::Content;
                None
            }
            _ => {
                self.search_input.handle_key(key);
                None
            }
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) -> Option<Action> {
        let entries = side_menu_entries();
        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.menu_selected = (self.menu_selected + 1) % entries.len();
                None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.menu_selected = (self.menu_selected + entries.len() - 1) % entries.len();
                None
            }
            KeyCode::Enter => entries
                .into_iter()
                .nth(self.menu_selected)
                .map(|(_, command)| Action::Run(command)),
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::Run(Command::ToggleMenu)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => self.handle_global_key(key),
        }
    }

    fn handle_content_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.navigator.select_next();
                None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.navigator.select_previous();
                None
            }
            KeyCode::Enter => {
                let selected = self.navigator.selected()?;
                self.navigator
                    .content()
                    .button_command(selected)
                    .cloned()
                    .map(Action::Run)
            }
            KeyCode::Char('m') => Some(Action::Run(Command::ToggleMenu)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => self.handle_global_key(key),
        }
    }

    /// Keys available whenever no popup is open and the search field is not focused.
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                None
            }
            KeyCode::Char('a') => Some(Action::Run(Command::OpenAbout)),
            KeyCode::Char('h') => Some(Action::Run(Command::NavigateTo(ScreenId::Home))),
            KeyCode::F(n) => RECOMMENDED_ITEMS
                .get(usize::from(n).checked_sub(1)?)
                .map(|item| Action::Run(Command::OpenRecommended(item.to_string()))),
            _ => None,
        }
    }
}
