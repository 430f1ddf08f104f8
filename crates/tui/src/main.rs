//! Settings TUI - terminal simulator of a desktop settings panel.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Screen content or navigation (see `settings_tui::view`, `settings_tui::navigation`).
//! - Configuration defaults and validation (see `crates/config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Only this loop mutates `App`; background tasks talk to it through the channel.

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc::channel;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use settings_config::ConfigLoader;
use settings_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use settings_tui::action::Action;
use settings_tui::app::{App, AppContext};
use settings_tui::cli::Cli;
use settings_tui::runtime::input::spawn_input_task;
use settings_tui::runtime::logging::{init_logging, resolve_log_dir};
use settings_tui::runtime::terminal::TerminalGuard;
use settings_tui::tutorial::TutorialProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Note: _log_guard must live for entire main() duration to ensure logs are flushed
    let log_dir = resolve_log_dir(cli.log_dir.clone());
    let _log_guard = init_logging(&log_dir)?;

    let mut loader = ConfigLoader::new().load_dotenv()?.from_env()?;
    if let Some(ms) = cli.update_check_ms {
        loader = loader.with_update_check_ms(ms);
    }
    if let Some(cycles) = cli.flash_cycles {
        loader = loader.with_flash_cycles(cycles);
    }
    let config = loader.build()?;
    tracing::info!(log_dir = %log_dir.display(), timing = ?config.timing, "Starting settings-tui");

    let progress = TutorialProgress::new();
    if cli.skip_tutorial {
        progress.mark_completed();
    }

    // Create task tracker for managing spawned tasks
    let task_tracker = TaskTracker::new();
    let input_cancel = CancellationToken::new();

    let (terminal_guard, mut terminal) = TerminalGuard::enter()?;

    // Bounded channel for actions from the input pump and running timelines
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    spawn_input_task(tx.clone(), &task_tracker, input_cancel.clone());

    let mut app = App::new(
        AppContext::new(tx.clone(), task_tracker.clone(), &config).with_progress(progress),
    );
    drop(tx);

    // UI tick drives toast expiry
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::trace!(?action, "Handling action");
                match action {
                    Action::Quit => break,
                    Action::Input(key) => {
                        if let Some(a) = app.handle_input(key) {
                            app.update(a);
                        }
                    }
                    other => app.update(other),
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Shutting down");

    // Graceful shutdown: stop producers, close tracker and wait for tasks
    app.shutdown();
    input_cancel.cancel();
    drop(rx);
    task_tracker.close();
    task_tracker.wait().await;

    terminal_guard.restore(&mut terminal)?;

    Ok(())
}
