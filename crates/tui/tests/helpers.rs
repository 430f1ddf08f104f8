//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input, mock
//! collaborators, and a harness that owns an `App` together with the
//! receiving end of its action channel.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;
use ratatui::{Terminal, backend::TestBackend};
use settings_config::{SimConfig, TimingConfig};
use settings_tui::action::Action;
use settings_tui::app::{App, AppContext};
use settings_tui::collaborators::{ApplyError, Clock, DesktopBackground, Rgb, UserIdentity};
use tokio::sync::mpsc::{Receiver, channel};
use tokio_util::task::TaskTracker;

mock! {
    pub Identity {}
    impl UserIdentity for Identity {
        fn display_name(&self) -> String;
    }
}

mock! {
    pub WallClock {}
    impl Clock for WallClock {
        fn time(&self) -> String;
        fn date(&self) -> String;
        fn time_zone(&self) -> String;
    }
}

mock! {
    pub Desktop {}
    impl DesktopBackground for Desktop {
        fn set_color(&self, color: Rgb) -> Result<(), ApplyError>;
    }
}

/// Identity that always answers `name`.
pub fn identity(name: &str) -> MockIdentity {
    let name = name.to_string();
    let mut mock = MockIdentity::new();
    mock.expect_display_name().returning(move || name.clone());
    mock
}

/// Clock frozen at a fixed instant.
pub fn frozen_clock() -> MockWallClock {
    let mut mock = MockWallClock::new();
    mock.expect_time().returning(|| "09:30:00".to_string());
    mock.expect_date().returning(|| "2024-05-17".to_string());
    mock.expect_time_zone().returning(|| "UTC+02:00".to_string());
    mock
}

/// Desktop that accepts every color.
pub fn accepting_desktop() -> MockDesktop {
    let mut mock = MockDesktop::new();
    mock.expect_set_color().returning(|_| Ok(()));
    mock
}

/// App plus the channel its timelines report into.
pub struct TestApp {
    pub app: App,
    pub rx: Receiver<Action>,
    pub tracker: TaskTracker,
}

impl TestApp {
    /// App with mock collaborators and default timing.
    pub fn new() -> Self {
        Self::with_context(|ctx| ctx)
    }

    /// App whose context is adjusted by `configure` before construction.
    pub fn with_context(configure: impl FnOnce(AppContext) -> AppContext) -> Self {
        let (tx, rx) = channel(256);
        let tracker = TaskTracker::new();
        let ctx = AppContext::new(tx, tracker.clone(), &SimConfig::default())
            .with_identity(Arc::new(identity("alice")))
            .with_clock(Arc::new(frozen_clock()))
            .with_desktop(Arc::new(accepting_desktop()));
        let app = App::new(configure(ctx));
        Self { app, rx, tracker }
    }

    /// App with the given timing and otherwise default mocks.
    pub fn with_timing(timing: TimingConfig) -> Self {
        Self::with_context(|ctx| ctx.with_timing(timing))
    }

    /// Feed a key through input handling and apply the resulting action.
    pub fn press(&mut self, key: KeyEvent) {
        if let Some(action) = self.app.handle_input(key) {
            self.app.update(action);
        }
    }

    /// Type `text` character by character.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(key(c));
        }
    }

    /// Apply every action that arrives within `duration` of virtual time.
    ///
    /// Meant for `start_paused` tests, where sleeping advances the clock
    /// straight to the next timer.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            tokio::select! {
                biased;
                Some(action) = self.rx.recv() => self.app.update(action),
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
    }

    /// Apply actions that are already queued, without advancing time.
    pub fn drain(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.app.update(action);
        }
    }

    /// Render into a test backend and return the screen text.
    pub fn render(&self, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
        terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push_str(cell.symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a function key event.
pub fn f_key(n: u8) -> KeyEvent {
    KeyEvent::new(KeyCode::F(n), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
