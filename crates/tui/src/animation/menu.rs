//! Slide-menu position and its toggle animation.

use std::time::Duration;

use settings_config::constants::{MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET};

use super::{Timeline, TimelineStep, VisualState};

/// Offset of the side menu within `[MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    offset: i32,
    open: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            offset: MENU_CLOSED_OFFSET,
            open: false,
        }
    }
}

impl MenuState {
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Whether the menu is open or heading open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True when some part of the menu is on screen.
    pub fn is_visible(&self) -> bool {
        self.offset > MENU_CLOSED_OFFSET
    }

    pub fn target(&self) -> i32 {
        if self.open {
            MENU_OPEN_OFFSET
        } else {
            MENU_CLOSED_OFFSET
        }
    }

    /// Apply an animated offset, clamped to the bounds.
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset.clamp(MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET);
    }

    /// Flip the open flag and build the slide from the current offset to the new bound.
    ///
    /// The last step lands exactly on the bound even when the travel is not a
    /// multiple of `step`. Already at the bound yields an empty timeline.
    pub fn toggle(&mut self, step: u16, tick: Duration) -> Timeline {
        self.open = !self.open;
        let target = self.target();
        let step = i32::from(step.max(1));

        let mut steps = Vec::new();
        let mut position = self.offset;
        while position != target {
            position = if position < target {
                (position + step).min(target)
            } else {
                (position - step).max(target)
            };
            steps.push(TimelineStep::new(VisualState::MenuOffset(position), tick));
        }
        tracing::debug!(
            open = self.open,
            from = self.offset,
            target,
            steps = steps.len(),
            "Menu toggled"
        );
        Timeline::new(steps)
    }
}
