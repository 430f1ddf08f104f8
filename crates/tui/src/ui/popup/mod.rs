//! Modal popup dialogs.
//!
//! This module provides a Builder pattern for constructing popups with
//! customizable titles, content, and types. Popups are rendered as
//! centered modal dialogs overlaid on the main UI and capture all keys
//! while open.

mod builder;
mod render;
mod types;

/// Default popup dimensions as percentages of screen size.
pub const POPUP_WIDTH_PERCENT: u16 = 60;
pub const POPUP_HEIGHT_PERCENT: u16 = 40;

pub use builder::{Popup, PopupBuilder};
pub use render::{centered_rect, render_popup};
pub use types::{ABOUT_BUTTONS, PopupType};
