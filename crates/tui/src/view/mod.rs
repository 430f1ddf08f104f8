//! View registry and the built-in settings screens.
//!
//! Responsibilities:
//! - Map each `ScreenId` to a render function (`registry`).
//! - Describe what each built-in screen shows (`screens`).
//! - Model the rendered content area (`content`).
//!
//! Does NOT handle:
//! - Deciding when to render (see `navigation`).
//! - Terminal drawing (see `ui::content`).

mod content;
mod registry;
pub mod screens;

pub use content::{ContentArea, Element};
pub use registry::{RenderContext, RenderFn, ViewRegistry, placeholder};
