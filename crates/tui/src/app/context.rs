//! Application context: everything `App::new` needs from the outside.
//!
//! Replaces global state. The binary builds one with the default
//! collaborators; tests swap in mocks through the `with_*` methods.

use std::sync::Arc;

use settings_config::{SimConfig, Theme, TimingConfig};
use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;

use crate::action::Action;
use crate::animation::Scheduler;
use crate::collaborators::{
    Clock, DesktopBackground, EnvUserIdentity, SimulatedDesktop, SystemClock, UserIdentity,
};
use crate::tutorial::TutorialProgress;

pub struct AppContext {
    pub scheduler: Scheduler,
    pub identity: Arc<dyn UserIdentity>,
    pub clock: Arc<dyn Clock>,
    pub desktop: Arc<dyn DesktopBackground>,
    pub progress: TutorialProgress,
    pub timing: TimingConfig,
    pub theme: Theme,
}

impl AppContext {
    /// Context with the default collaborators.
    ///
    /// `tx` is the action channel timelines report into; `tracker` owns
    /// their tasks so shutdown can wait for them.
    pub fn new(tx: Sender<Action>, tracker: TaskTracker, config: &SimConfig) -> Self {
        Self {
            scheduler: Scheduler::new(tx, tracker),
            identity: Arc::new(EnvUserIdentity),
            clock: Arc::new(SystemClock),
            desktop: Arc::new(SimulatedDesktop::new()),
            progress: TutorialProgress::new(),
            timing: config.timing,
            theme: config.theme,
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn UserIdentity>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_desktop(mut self, desktop: Arc<dyn DesktopBackground>) -> Self {
        self.desktop = desktop;
        self
    }

    /// Share an existing completion flag instead of a fresh one.
    pub fn with_progress(mut self, progress: TutorialProgress) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}
