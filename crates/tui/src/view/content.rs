//! Content-area model produced by render functions.
//!
//! A `ContentArea` is a flat list of elements; the UI layer decides how to
//! draw them. Buttons carry the `Command` they trigger.

use crate::command::Command;

/// One item of the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(String),
    SubHeading(String),
    Label(String),
    Button { label: String, command: Command },
    /// Placeholder filled with the live update-check status when drawn.
    UpdateStatus,
}

/// Everything currently shown in the content area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentArea {
    elements: Vec<Element>,
}

impl ContentArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.elements.push(Element::Heading(text.into()));
        self
    }

    pub fn sub_heading(mut self, text: impl Into<String>) -> Self {
        self.elements.push(Element::SubHeading(text.into()));
        self
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.elements.push(Element::Label(text.into()));
        self
    }

    pub fn button(mut self, label: impl Into<String>, command: Command) -> Self {
        self.elements.push(Element::Button {
            label: label.into(),
            command,
        });
        self
    }

    pub fn update_status(mut self) -> Self {
        self.elements.push(Element::UpdateStatus);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.elements.iter().filter_map(|e| match e {
            Element::Button { label, command } => Some((label.as_str(), command)),
            _ => None,
        })
    }

    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Command of the `index`-th button, if any.
    pub fn button_command(&self, index: usize) -> Option<&Command> {
        self.buttons().nth(index).map(|(_, command)| command)
    }

    /// True if any heading, label or button shows exactly `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.elements.iter().any(|e| match e {
            Element::Heading(t) | Element::SubHeading(t) | Element::Label(t) => t == text,
            Element::Button { label, .. } => label == text,
            Element::UpdateStatus => false,
        })
    }
}
