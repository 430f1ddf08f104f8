//! Single-line text field backed by `tui-input`.
//!
//! Used for the top-bar search field and the color picker.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line input with a placeholder.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: Option<String>,
}

impl SingleLineInput {
    /// Create a new empty single-line input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Handle key event using InputRequest pattern.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                // Ctrl+U: clear line
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    /// Get current value.
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Set value programmatically.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Get cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.input = Input::default();
    }

    /// Take the current value, leaving the field empty.
    pub fn take(&mut self) -> String {
        let value = self.input.value().to_string();
        self.clear();
        value
    }

    /// Get the placeholder text if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = SingleLineInput::with_placeholder("Search");
        for c in "dsplay".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        for _ in 0..5 {
            input.handle_key(key(KeyCode::Left));
        }
        input.handle_key(key(KeyCode::Char('i')));

        assert_eq!(input.value(), "display");
        assert_eq!(input.cursor_position(), 2);
        assert_eq!(input.placeholder(), Some("Search"));
    }

    #[test]
    fn test_take_clears() {
        let mut input = SingleLineInput::new();
        input.set_value("#ff0000");
        assert_eq!(input.take(), "#ff0000");
        assert!(input.is_empty());
    }

    #[test]
    fn test_ctrl_u_clears_line() {
        let mut input = SingleLineInput::new();
        input.set_value("bluetooth");
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(input.is_empty());
    }
}
