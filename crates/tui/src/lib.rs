//! Settings TUI Library
//!
//! This library provides the application state, navigation, animation
//! timelines and UI components of a terminal settings-panel simulator.
//!
//! # Example
//!
//! ```rust
//! use settings_tui::search::{SearchDispatcher, SearchOutcome};
//! use settings_tui::command::Command;
//! use settings_tui::screen::ScreenId;
//!
//! let search = SearchDispatcher::default();
//! match search.lookup("Bluetooth") {
//!     SearchOutcome::Matched { command, .. } => {
//!         assert_eq!(command, Command::NavigateTo(ScreenId::BluetoothDevices));
//!     }
//!     SearchOutcome::NoMatch { .. } => unreachable!(),
//! }
//! ```

pub mod action;
pub mod animation;
pub mod app;
pub mod cli;
pub mod collaborators;
pub mod command;
pub mod navigation;
pub mod runtime;
pub mod screen;
pub mod search;
pub mod simulator;
pub mod tutorial;
pub mod ui;
pub mod view;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, AppContext, Focus};
pub use command::Command;
pub use screen::{ScreenId, ScreenParams};
pub use ui::popup::{Popup, PopupType};
pub use ui::toast::{Toast, ToastLevel};
