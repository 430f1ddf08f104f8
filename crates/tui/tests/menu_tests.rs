//! Tests for the sliding side menu.
//!
//! This module tests:
//! - Opening and closing slide to the exact bounds
//! - Toggling mid-slide reverses from the current offset
//! - Keyboard navigation of the menu rows
//!
//! ## Invariants
//! - The offset never leaves `[MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET]`
//! - Only the latest toggle's timeline moves the menu

mod helpers;

use std::time::Duration;

use helpers::*;
use settings_config::constants::{MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET};
use settings_tui::action::Action;
use settings_tui::app::Focus;
use settings_tui::command::Command;
use settings_tui::screen::ScreenId;

// 250 units at 10 units per 10 ms tick.
const SLIDE: Duration = Duration::from_millis(250);

#[tokio::test(start_paused = true)]
async fn test_open_slides_to_open_bound() {
    let mut t = TestApp::new();
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);
    assert!(!t.app.menu.is_visible());

    t.press(key('m'));
    assert!(t.app.menu.is_open());
    assert_eq!(t.app.focus, Focus::Menu);

    t.run_for(Duration::from_millis(100)).await;
    let midway = t.app.menu.offset();
    assert!(midway > MENU_CLOSED_OFFSET && midway < MENU_OPEN_OFFSET);

    t.run_for(SLIDE).await;
    assert_eq!(t.app.menu.offset(), MENU_OPEN_OFFSET);
}

#[tokio::test(start_paused = true)]
async fn test_close_slides_back_to_closed_bound() {
    let mut t = TestApp::new();

    t.press(key('m'));
    t.run_for(SLIDE * 2).await;
    t.press(esc_key());
    assert!(!t.app.menu.is_open());
    assert_eq!(t.app.focus, Focus::Content);

    t.run_for(SLIDE * 2).await;
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);
    assert!(!t.app.menu.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_toggle_mid_slide_reverses() {
    let mut t = TestApp::new();

    t.app.execute(Command::ToggleMenu);
    t.run_for(Duration::from_millis(105)).await;
    let reversed_at = t.app.menu.offset();

    t.app.execute(Command::ToggleMenu);
    t.run_for(Duration::from_millis(5)).await;
    // The reverse slide starts from where the open slide was
    assert!(t.app.menu.offset() <= reversed_at);

    t.run_for(SLIDE * 2).await;
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);
}

#[tokio::test(start_paused = true)]
async fn test_stale_steps_are_ignored() {
    let mut t = TestApp::new();

    t.app.execute(Command::ToggleMenu);
    t.app.execute(Command::ToggleMenu);

    // The first timeline may have queued a step before it was cancelled
    t.app.update(Action::TimelineStep {
        resource: settings_tui::animation::Resource::Menu,
        generation: 1,
        state: settings_tui::animation::VisualState::MenuOffset(-100),
    });
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);

    t.run_for(SLIDE).await;
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);
}

#[tokio::test(start_paused = true)]
async fn test_menu_row_navigates_and_stays_open() {
    let mut t = TestApp::new();

    t.press(key('m'));
    t.run_for(SLIDE * 2).await;

    // Row 0 is "Close Menu", row 1 "System", row 2 "Bluetooth & Devices"
    t.press(down_key());
    t.press(down_key());
    assert_eq!(t.app.menu_selected, 2);
    t.press(enter_key());

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::BluetoothDevices);
    assert!(t.app.menu.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_close_row_closes_menu() {
    let mut t = TestApp::new();

    t.press(key('m'));
    t.run_for(SLIDE * 2).await;
    t.press(enter_key());

    assert!(!t.app.menu.is_open());
    t.run_for(SLIDE * 2).await;
    assert_eq!(t.app.menu.offset(), MENU_CLOSED_OFFSET);
}

#[tokio::test(start_paused = true)]
async fn test_unimplemented_category_shows_placeholder() {
    let mut t = TestApp::new();

    t.press(key('m'));
    t.press(up_key());
    // Wraps to the last row, "Windows Update"; one more up is "Privacy & Security"
    t.press(up_key());
    t.press(enter_key());

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::PrivacySecurity);
    assert!(
        t.app
            .navigator
            .content()
            .contains_text("Privacy & Security options coming soon")
    );
}
