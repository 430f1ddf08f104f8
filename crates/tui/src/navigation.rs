//! Navigation controller.
//!
//! Responsibilities:
//! - Own the live `NavigationState` and the content rendered for it.
//! - Replace both atomically on every `navigate_to` call.
//! - Track which content button is selected.
//!
//! Does NOT handle:
//! - Animations or delays (callers schedule those and navigate on completion).
//! - Interpreting commands (see `App::execute`).
//!
//! Invariants:
//! - Content is replaced wholesale, never appended to.
//! - `navigate_to` is synchronous and idempotent for a given (screen, params).
//! - The selection is reset to the first button on every navigation.

use crate::screen::{NavigationState, ScreenId, ScreenParams};
use crate::view::{ContentArea, RenderContext, ViewRegistry};

/// Decides what the content area shows.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: ViewRegistry,
    state: NavigationState,
    content: ContentArea,
    selected: usize,
}

impl Navigator {
    /// Create a navigator showing the Home screen.
    pub fn new(registry: ViewRegistry, ctx: &RenderContext<'_>) -> Self {
        let state = NavigationState::default();
        let content = registry.render(ctx, &state.screen, &state.params);
        Self {
            registry,
            state,
            content,
            selected: 0,
        }
    }

    /// Clear the content area and render `screen` with `params`.
    pub fn navigate_to(&mut self, ctx: &RenderContext<'_>, screen: ScreenId, params: ScreenParams) {
        tracing::debug!(screen = %screen, ?params, "Navigating");
        self.content = self.registry.render(ctx, &screen, &params);
        self.state = NavigationState::new(screen, params);
        self.selected = 0;
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_screen(&self) -> &ScreenId {
        &self.state.screen
    }

    pub fn content(&self) -> &ContentArea {
        &self.content
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Index of the selected button, or `None` when the screen has no buttons.
    pub fn selected(&self) -> Option<usize> {
        (self.content.button_count() > 0).then_some(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.content.button_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.content.button_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}
