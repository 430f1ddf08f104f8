//! UI rendering modules for the TUI.
//!
//! This module contains the drawing code for each region of the window,
//! separated from the app state it reads.

pub mod chrome;
pub mod content;
pub mod input;
pub mod menu;
pub mod popup;
pub mod toast;

pub use input::SingleLineInput;
pub use toast::{Toast, ToastLevel};
