//! Timeline scheduler backed by tokio tasks.
//!
//! Each running timeline is one task tracked by a shared `TaskTracker` and
//! paired with a `CancellationToken`. Tasks never touch app state; they send
//! `Action::TimelineStep` / `Action::TimelineFinished` tagged with the
//! generation they were started with, and the app drops messages whose
//! generation is no longer current for that resource.

use std::collections::HashMap;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::{Resource, Timeline};
use crate::action::Action;
use crate::command::Command;

/// Result of starting a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Started {
    /// Steps will arrive as actions tagged with `generation`.
    Running { generation: u64 },
    /// The timeline was empty; its completion command is due now.
    Completed(Option<Command>),
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    cancel: CancellationToken,
}

/// Runs at most one timeline per resource.
#[derive(Debug)]
pub struct Scheduler {
    tx: Sender<Action>,
    tracker: TaskTracker,
    slots: HashMap<Resource, Slot>,
    next_generation: u64,
}

impl Scheduler {
    pub fn new(tx: Sender<Action>, tracker: TaskTracker) -> Self {
        Self {
            tx,
            tracker,
            slots: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Start `timeline` on `resource`, superseding whatever ran there.
    ///
    /// Must be called from within a tokio runtime unless the timeline is empty.
    pub fn run_timeline(&mut self, resource: Resource, timeline: Timeline) -> Started {
        self.cancel(resource);

        if timeline.is_empty() {
            tracing::debug!(?resource, "Empty timeline completed immediately");
            return Started::Completed(timeline.on_complete);
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let cancel = CancellationToken::new();
        self.slots.insert(
            resource,
            Slot {
                generation,
                cancel: cancel.clone(),
            },
        );

        tracing::debug!(
            ?resource,
            generation,
            steps = timeline.steps.len(),
            "Starting timeline"
        );

        let tx = self.tx.clone();
        self.tracker.spawn(async move {
            let Timeline { steps, on_complete } = timeline;
            for step in steps {
                if cancel.is_cancelled() {
                    return;
                }
                let action = Action::TimelineStep {
                    resource,
                    generation,
                    state: step.state,
                };
                if tx.send(action).await.is_err() {
                    // Channel closed, app is shutting down
                    return;
                }
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(step.hold) => {}
                }
            }
            if cancel.is_cancelled() {
                return;
            }
            let _ = tx
                .send(Action::TimelineFinished {
                    resource,
                    generation,
                    on_complete,
                })
                .await;
        });

        Started::Running { generation }
    }

    /// Cancel the timeline running on `resource`, if any.
    pub fn cancel(&mut self, resource: Resource) {
        if let Some(slot) = self.slots.remove(&resource) {
            tracing::debug!(?resource, generation = slot.generation, "Timeline superseded");
            slot.cancel.cancel();
        }
    }

    /// True if `generation` is the live timeline on `resource`.
    pub fn is_current(&self, resource: Resource, generation: u64) -> bool {
        self.slots
            .get(&resource)
            .is_some_and(|slot| slot.generation == generation)
    }

    /// Retire a finished timeline. Returns false for stale or repeated reports.
    pub fn finish(&mut self, resource: Resource, generation: u64) -> bool {
        if self.is_current(resource, generation) {
            self.slots.remove(&resource);
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self, resource: Resource) -> bool {
        self.slots.contains_key(&resource)
    }

    /// Cancel every running timeline.
    pub fn shutdown(&mut self) {
        for (_, slot) in self.slots.drain() {
            slot.cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc::{Receiver, channel};

    use super::*;
    use crate::animation::{Backdrop, TimelineStep, VisualState, flash_timeline};
    use crate::screen::ScreenId;

    fn scheduler() -> (Scheduler, Receiver<Action>) {
        let (tx, rx) = channel(64);
        (Scheduler::new(tx, TaskTracker::new()), rx)
    }

    fn drain(rx: &mut Receiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeline_steps_then_finishes_once() {
        let (mut scheduler, mut rx) = scheduler();
        let command = Command::NavigateTo(ScreenId::System);
        let started = scheduler.run_timeline(
            Resource::ContentBackground,
            flash_timeline(3, Duration::from_millis(100), command.clone()),
        );
        let Started::Running { generation } = started else {
            panic!("expected running timeline, got {started:?}");
        };

        tokio::time::sleep(Duration::from_millis(601)).await;
        let actions = drain(&mut rx);

        let steps = actions
            .iter()
            .filter(|a| matches!(a, Action::TimelineStep { .. }))
            .count();
        assert_eq!(steps, 6);
        let finished: Vec<_> = actions
            .iter()
            .filter_map(|a| match a {
                Action::TimelineFinished {
                    generation: g,
                    on_complete,
                    ..
                } => Some((*g, on_complete.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(finished, vec![(generation, Some(command))]);

        assert!(scheduler.finish(Resource::ContentBackground, generation));
        assert!(!scheduler.finish(Resource::ContentBackground, generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_timeline_goes_quiet() {
        let (mut scheduler, mut rx) = scheduler();
        let first = scheduler.run_timeline(
            Resource::ContentBackground,
            flash_timeline(3, Duration::from_millis(100), Command::ToggleMenu),
        );
        tokio::time::sleep(Duration::from_millis(150)).await;
        drain(&mut rx);

        let second = scheduler.run_timeline(
            Resource::ContentBackground,
            flash_timeline(1, Duration::from_millis(100), Command::OpenAbout),
        );
        assert_ne!(first, second);
        let (Started::Running { generation: old }, Started::Running { generation: new }) =
            (first, second)
        else {
            panic!("both timelines should be running");
        };

        tokio::time::sleep(Duration::from_secs(1)).await;
        let actions = drain(&mut rx);

        assert!(actions.iter().all(|a| match a {
            Action::TimelineStep { generation, .. }
            | Action::TimelineFinished { generation, .. } => *generation == new,
            _ => true,
        }));
        assert!(actions.contains(&Action::TimelineFinished {
            resource: Resource::ContentBackground,
            generation: new,
            on_complete: Some(Command::OpenAbout),
        }));
        assert!(!scheduler.is_current(Resource::ContentBackground, old));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resources_are_independent() {
        let (mut scheduler, mut rx) = scheduler();
        let step = |state| Timeline::new(vec![TimelineStep::new(state, Duration::from_millis(50))]);

        scheduler.run_timeline(Resource::Menu, step(VisualState::MenuOffset(-10)));
        scheduler.run_timeline(
            Resource::ContentBackground,
            step(VisualState::Background(Backdrop::Highlight)),
        );
        assert!(scheduler.is_busy(Resource::Menu));
        assert!(scheduler.is_busy(Resource::ContentBackground));

        tokio::time::sleep(Duration::from_millis(60)).await;
        let finished = drain(&mut rx)
            .into_iter()
            .filter(|a| matches!(a, Action::TimelineFinished { .. }))
            .count();
        assert_eq!(finished, 2);
    }

    #[test]
    fn test_empty_timeline_completes_synchronously() {
        let (mut scheduler, mut rx) = scheduler();
        let started =
            scheduler.run_timeline(Resource::Menu, Timeline::default().then(Command::ToggleMenu));

        assert_eq!(started, Started::Completed(Some(Command::ToggleMenu)));
        assert!(!scheduler.is_busy(Resource::Menu));
        assert!(drain(&mut rx).is_empty());
    }
}
