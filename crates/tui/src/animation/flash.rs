//! Search-match flash of the content background.

use std::time::Duration;

use super::{Timeline, TimelineStep, VisualState};
use crate::command::Command;

/// Background state of the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Normal,
    Highlight,
}

/// `cycles` Highlight/Normal pairs, each state held for `hold`, then `on_complete`.
pub fn flash_timeline(cycles: u32, hold: Duration, on_complete: Command) -> Timeline {
    let steps = (0..cycles)
        .flat_map(|_| {
            [
                TimelineStep::new(VisualState::Background(Backdrop::Highlight), hold),
                TimelineStep::new(VisualState::Background(Backdrop::Normal), hold),
            ]
        })
        .collect();
    Timeline::new(steps).then(on_complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenId;

    #[test]
    fn test_flash_alternates_and_ends_normal() {
        let timeline = flash_timeline(
            3,
            Duration::from_millis(100),
            Command::NavigateTo(ScreenId::System),
        );

        assert_eq!(timeline.steps.len(), 6);
        assert_eq!(timeline.duration(), Duration::from_millis(600));
        assert_eq!(
            timeline.steps[0].state,
            VisualState::Background(Backdrop::Highlight)
        );
        assert_eq!(
            timeline.steps.last().map(|s| &s.state),
            Some(&VisualState::Background(Backdrop::Normal))
        );
        assert_eq!(
            timeline.on_complete,
            Some(Command::NavigateTo(ScreenId::System))
        );
    }
}
