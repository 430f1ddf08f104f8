//! Guided tutorial sequencer.
//!
//! Responsibilities:
//! - Hold the scripted list of (message, command) steps.
//! - Track the live session's cursor and completion.
//! - Record completion in the process-wide `TutorialProgress` flag.
//!
//! Does NOT handle:
//! - Executing step commands (the app runs what `advance` returns).
//! - Rendering the overlay (see `ui::popup`).
//!
//! Invariants:
//! - A session moves `InProgress(0) -> ... -> Completed` and never backwards.
//! - Once `TutorialProgress` is set it stays set for the life of the process.
//! - `advance` yields each step's command exactly once per session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::command::Command;
use crate::screen::ScreenId;

pub const TUTORIAL_COMPLETED_MESSAGE: &str = "Tutorial Completed! Have Fun!";
pub const TUTORIAL_ALREADY_COMPLETED_MESSAGE: &str = "Tutorial already completed!";

/// Process-wide "tutorial has been completed" flag.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct TutorialProgress(Arc<AtomicBool>);

impl TutorialProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn mark_completed(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// One scripted tutorial step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialStep {
    pub message: String,
    pub command: Command,
}

impl TutorialStep {
    pub fn new(message: impl Into<String>, command: Command) -> Self {
        Self {
            message: message.into(),
            command,
        }
    }
}

/// The built-in tour.
pub fn default_script() -> Vec<TutorialStep> {
    vec![
        TutorialStep::new("Clicking Hamburger Menu", Command::ToggleMenu),
        TutorialStep::new(
            "This is your Apps section",
            Command::NavigateTo(ScreenId::BluetoothDevices),
        ),
        TutorialStep::new(
            "This is System Update",
            Command::NavigateTo(ScreenId::WindowsUpdate),
        ),
        TutorialStep::new(
            "These are System Update Features",
            Command::OpenSystemFeature("Display".to_string()),
        ),
    ]
}

/// Where the current session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialPhase {
    NotStarted,
    InProgress(usize),
    Completed,
}

/// What the overlay's single button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialControl {
    Next,
    Close,
}

impl TutorialControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Close => "Close",
        }
    }
}

/// Result of asking to start the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session opened at the first step.
    Started,
    /// The tutorial was finished earlier in this process; no session opened.
    AlreadyCompleted,
    /// A session is already open and was left as is.
    AlreadyOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TutorialSession {
    cursor: usize,
    completed: bool,
}

/// Drives one tutorial session at a time.
#[derive(Debug, Clone)]
pub struct TutorialSequencer {
    steps: Vec<TutorialStep>,
    progress: TutorialProgress,
    session: Option<TutorialSession>,
}

impl TutorialSequencer {
    pub fn new(steps: Vec<TutorialStep>, progress: TutorialProgress) -> Self {
        Self {
            steps,
            progress,
            session: None,
        }
    }

    pub fn with_default_script(progress: TutorialProgress) -> Self {
        Self::new(default_script(), progress)
    }

    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.session.is_some() {
            return StartOutcome::AlreadyOpen;
        }
        if self.progress.is_completed() {
            tracing::debug!("Tutorial start refused: already completed");
            return StartOutcome::AlreadyCompleted;
        }
        tracing::info!(steps = self.steps.len(), "Tutorial started");
        self.session = Some(TutorialSession {
            cursor: 0,
            completed: self.steps.is_empty(),
        });
        if self.steps.is_empty() {
            self.progress.mark_completed();
        }
        StartOutcome::Started
    }

    /// Move one step forward, returning the command of the step just left.
    ///
    /// Returns `None` when no session is open or it has already completed.
    pub fn advance(&mut self) -> Option<Command> {
        let session = self.session.as_mut()?;
        if session.completed {
            return None;
        }
        let command = self.steps.get(session.cursor)?.command.clone();
        session.cursor += 1;
        if session.cursor >= self.steps.len() {
            session.completed = true;
            self.progress.mark_completed();
            tracing::info!("Tutorial completed");
        }
        Some(command)
    }

    /// Message the overlay should show, if a session is open.
    pub fn message(&self) -> Option<&str> {
        let session = self.session.as_ref()?;
        if session.completed {
            Some(TUTORIAL_COMPLETED_MESSAGE)
        } else {
            self.steps.get(session.cursor).map(|s| s.message.as_str())
        }
    }

    pub fn control(&self) -> Option<TutorialControl> {
        self.session.as_ref().map(|s| {
            if s.completed {
                TutorialControl::Close
            } else {
                TutorialControl::Next
            }
        })
    }

    pub fn phase(&self) -> TutorialPhase {
        match &self.session {
            None => TutorialPhase::NotStarted,
            Some(s) if s.completed => TutorialPhase::Completed,
            Some(s) => TutorialPhase::InProgress(s.cursor),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Destroy the session. The process-wide flag is left as is.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Tutorial overlay closed");
        }
    }
}
