//! Keyboard and resize pump.
//!
//! Responsibilities:
//! - Read terminal events from crossterm's `EventStream`.
//! - Forward key presses and resizes to the action channel.
//!
//! Does NOT handle:
//! - Interpreting keys (see `App::handle_input`).
//!
//! Invariants:
//! - Key presses are sent with `send().await` so user intent is never dropped.
//! - The task exits when cancelled, when the stream ends, or when the channel closes.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::action::Action;

/// Translate a terminal event into an action, if it is one we care about.
pub fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the input task on `tracker`.
pub fn spawn_input_task(tx: Sender<Action>, tracker: &TaskTracker, cancel: CancellationToken) {
    tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => break,
                next = reader.next() => next,
            };
            match next {
                Some(Ok(event)) => {
                    let Some(action) = event_to_action(event) else {
                        continue;
                    };
                    if tx.send(action).await.is_err() {
                        // Channel closed, exit task
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Failed to read terminal event");
                }
                None => break,
            }
        }
        tracing::debug!("Input task stopped");
    });
}
