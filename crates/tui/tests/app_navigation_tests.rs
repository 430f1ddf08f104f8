//! Tests for navigation through the app.
//!
//! This module tests:
//! - Navigating replaces the content area wholesale
//! - Navigating twice to the same screen is idempotent
//! - Unregistered screens fall back to the placeholder
//! - System features and the Display special case
//! - Collaborator values flowing into rendered screens
//!
//! ## Invariants
//! - Exactly one screen is shown at a time
//! - Content never accumulates across navigations

mod helpers;

use helpers::*;
use settings_tui::command::Command;
use settings_tui::screen::{ScreenId, ScreenParams};

#[tokio::test]
async fn test_starts_on_home() {
    let t = TestApp::new();
    assert_eq!(t.app.navigator.current_screen(), &ScreenId::Home);
    assert!(t.app.navigator.content().contains_text("Welcome to Settings Simulator"));
}

#[tokio::test]
async fn test_navigation_replaces_content() {
    let mut t = TestApp::new();

    t.app.execute(Command::NavigateTo(ScreenId::Gaming));
    assert!(t.app.navigator.content().contains_text("Game Mode: Enabled"));

    t.app.execute(Command::NavigateTo(ScreenId::NetworkInternet));
    let content = t.app.navigator.content();
    assert!(content.contains_text("HomeWiFi"));
    assert!(!content.contains_text("Game Mode: Enabled"));
}

#[tokio::test]
async fn test_navigating_twice_is_idempotent() {
    let mut t = TestApp::new();

    t.app.execute(Command::NavigateTo(ScreenId::BluetoothDevices));
    let first = t.app.navigator.content().clone();
    t.app.execute(Command::NavigateTo(ScreenId::BluetoothDevices));

    assert_eq!(t.app.navigator.content(), &first);
    assert_eq!(first.elements().len(), 5);
}

#[tokio::test]
async fn test_unregistered_screen_shows_placeholder() {
    let mut t = TestApp::new();

    t.app.execute(Command::NavigateTo(ScreenId::PrivacySecurity));

    let content = t.app.navigator.content();
    assert!(content.contains_text("Privacy & Security"));
    assert!(content.contains_text("Privacy & Security options coming soon"));
}

#[tokio::test]
async fn test_system_feature_opens_feature_page() {
    let mut t = TestApp::new();

    t.app.execute(Command::OpenSystemFeature("Sound".to_string()));

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::System);
    assert_eq!(
        t.app.navigator.state().params,
        ScreenParams::Feature("Sound".to_string())
    );
    assert!(t.app.navigator.content().contains_text("Sound options coming soon"));
    assert_eq!(
        t.app.navigator.content().button_command(0),
        Some(&Command::NavigateTo(ScreenId::System))
    );
}

#[tokio::test]
async fn test_display_feature_opens_display_screen() {
    let mut t = TestApp::new();

    t.app.execute(Command::OpenSystemFeature("Display".to_string()));

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::Display);
    assert_eq!(
        t.app.navigator.content().button_command(0),
        Some(&Command::ChangeBackgroundColor)
    );
}

#[tokio::test]
async fn test_system_buttons_open_features_via_keyboard() {
    let mut t = TestApp::new();
    t.app.execute(Command::NavigateTo(ScreenId::System));

    // Second feature in the list
    t.press(down_key());
    t.press(enter_key());

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::System);
    assert!(matches!(
        t.app.navigator.state().params,
        ScreenParams::Feature(_)
    ));

    // Back returns to the feature list
    t.press(enter_key());
    assert_eq!(t.app.navigator.state().params, ScreenParams::None);
}

#[tokio::test]
async fn test_accounts_shows_user_name() {
    let mut t = TestApp::new();

    t.app.execute(Command::NavigateTo(ScreenId::Accounts));

    assert!(t.app.navigator.content().contains_text("Account: alice"));
}

#[tokio::test]
async fn test_time_language_reads_clock() {
    let mut t = TestApp::new();

    t.app.execute(Command::NavigateTo(ScreenId::TimeLanguage));

    let content = t.app.navigator.content();
    assert!(content.contains_text("Current Time: 09:30:00"));
    assert!(content.contains_text("Current Date: 2024-05-17"));
    assert!(content.contains_text("Time Zone: UTC+02:00"));
}

#[tokio::test]
async fn test_home_key_returns_home() {
    let mut t = TestApp::new();
    t.app.execute(Command::NavigateTo(ScreenId::Gaming));

    t.press(key('h'));

    assert_eq!(t.app.navigator.current_screen(), &ScreenId::Home);
}
