//! Rendering tests against ratatui's `TestBackend`.
//!
//! This module tests:
//! - The chrome (top bar and recommended bar) is always drawn
//! - Screen content, the update status slot, and the side menu appear
//! - Popups and toasts are drawn over the content
//! - Very small terminals render without panicking

mod helpers;

use std::time::Duration;

use helpers::*;
use settings_config::constants::UPDATE_CHECKING_LABEL;
use settings_tui::command::Command;
use settings_tui::screen::ScreenId;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

#[tokio::test]
async fn test_home_screen_render() {
    let t = TestApp::new();
    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("Settings"));
    assert!(screen.contains("About (a)"));
    assert!(screen.contains("Menu (m)"));
    assert!(screen.contains("Welcome to Settings Simulator"));
    assert!(screen.contains("Lock Screen"));
    assert!(screen.contains("F7"));
}

#[tokio::test]
async fn test_buttons_render_in_brackets() {
    let mut t = TestApp::new();
    t.app.execute(Command::NavigateTo(ScreenId::System));

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("[ Display ]"));
    assert!(screen.contains("[ Power & Battery ]") || screen.contains("[ Sound ]"));
}

#[tokio::test]
async fn test_update_status_slot_renders_live_label() {
    let mut t = TestApp::new();
    t.app.execute(Command::NavigateTo(ScreenId::WindowsUpdate));
    t.app.execute(Command::CheckForUpdates);

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains(UPDATE_CHECKING_LABEL));
    assert!(screen.contains("[ Check for Updates ]"));
}

#[tokio::test(start_paused = true)]
async fn test_open_menu_renders_categories() {
    let mut t = TestApp::new();
    t.press(key('m'));
    t.run_for(Duration::from_secs(1)).await;

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("User Account"));
    assert!(screen.contains("Close Menu"));
    assert!(screen.contains("Bluetooth & Devices"));
    assert!(screen.contains("Windows Update"));
}

#[tokio::test]
async fn test_closed_menu_is_not_drawn() {
    let t = TestApp::new();
    let screen = t.render(WIDTH, HEIGHT);

    assert!(!screen.contains("User Account"));
}

#[tokio::test]
async fn test_about_popup_render() {
    let mut t = TestApp::new();
    t.press(key('a'));

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("About Settings"));
    assert!(screen.contains("[ Full Tutorial ]"));
    assert!(screen.contains("[ Close ]"));
}

#[tokio::test]
async fn test_tutorial_overlay_render() {
    let mut t = TestApp::new();
    t.press(key('a'));
    t.press(enter_key());

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("Clicking Hamburger Menu"));
    assert!(screen.contains("[ Next ]"));
}

#[tokio::test]
async fn test_color_picker_shows_validation_error() {
    let mut t = TestApp::new();
    t.app.execute(Command::ChangeBackgroundColor);
    t.type_text("#12");
    t.press(enter_key());

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("Choose background color"));
    assert!(screen.contains("#12"));
    assert!(screen.contains("exactly 6 hex digits"));
}

#[tokio::test]
async fn test_search_miss_toast_render() {
    let mut t = TestApp::new();
    t.app.submit_search("xyzzy");

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("No results found for 'xyzzy'"));
}

#[tokio::test]
async fn test_search_field_shows_typed_text() {
    let mut t = TestApp::new();
    t.press(key('/'));
    t.type_text("blue");

    let screen = t.render(WIDTH, HEIGHT);

    assert!(screen.contains("blue_"));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut t = TestApp::new();
    t.press(key('a'));
    t.app.submit_search("nothing");

    let _ = t.render(10, 4);
    let _ = t.render(1, 1);
}
