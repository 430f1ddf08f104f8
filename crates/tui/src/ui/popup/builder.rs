//! Popup struct and builder implementation.

use crate::ui::popup::PopupType;

/// A modal popup dialog with title, content, and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// The title displayed in the popup border
    pub title: String,
    /// The main content text of the popup
    pub content: String,
    /// The kind/type of popup (determines behavior and default styling)
    pub kind: PopupType,
}

impl Popup {
    /// Create a new `PopupBuilder` for the given popup type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settings_tui::ui::popup::{Popup, PopupType};
    ///
    /// let popup = Popup::builder(PopupType::About { selected: 0 }).build();
    /// assert_eq!(popup.title, "About Settings");
    /// ```
    pub fn builder(kind: PopupType) -> PopupBuilder {
        PopupBuilder::new(kind)
    }

    /// Shorthand for an info popup.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::builder(PopupType::Info)
            .title(title)
            .content(message)
            .build()
    }

    /// Shorthand for an error popup.
    pub fn error(message: impl Into<String>) -> Self {
        Self::builder(PopupType::Error).content(message).build()
    }
}

/// Builder for constructing `Popup` instances.
pub struct PopupBuilder {
    kind: PopupType,
    title: Option<String>,
    content: Option<String>,
}

impl PopupBuilder {
    /// Create a new builder for the given popup type.
    pub fn new(kind: PopupType) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    /// Set the popup title.
    ///
    /// If not set, a default title will be used based on the popup type.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the popup content.
    ///
    /// If not set, default content will be used based on the popup type.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Build the `Popup` instance using defaults derived from `PopupType`.
    pub fn build(self) -> Popup {
        let (default_title, default_content) = self.build_defaults();

        Popup {
            title: self.title.unwrap_or(default_title),
            content: self.content.unwrap_or(default_content),
            kind: self.kind,
        }
    }

    fn build_defaults(&self) -> (String, String) {
        match &self.kind {
            PopupType::Info => ("Info".to_string(), String::new()),
            PopupType::Error => ("Error".to_string(), String::new()),
            PopupType::About { .. } => (
                "About Settings".to_string(),
                "Up/Down to choose, Enter to confirm, Esc to close".to_string(),
            ),
            PopupType::Tutorial => ("Tutorial".to_string(), String::new()),
            PopupType::ColorPicker => (
                "Choose background color".to_string(),
                "Enter a color as #rrggbb and press Enter (Esc to cancel)".to_string(),
            ),
        }
    }
}
