//! Built-in settings screens.
//!
//! Each function here is a `RenderFn`. Content is fixed apart from the user
//! name and the clock readings.

use crate::command::Command;
use crate::screen::{ScreenId, ScreenParams};
use crate::view::{ContentArea, RenderContext};

/// Feature pages listed on the System screen, in display order.
pub const SYSTEM_FEATURES: [&str; 7] = [
    "Display",
    "Sound",
    "Notifications",
    "Power & Battery",
    "Storage",
    "Nearby Sharing",
    "Activation",
];

pub const BLUETOOTH_DEVICES: [&str; 3] = ["Device 1", "Device 2", "Device 3"];

pub const WIFI_NETWORKS: [&str; 4] = ["HomeWiFi", "OfficeNetwork", "GuestNetwork", "MobileHotspot"];

fn back_to_system(content: ContentArea) -> ContentArea {
    content.button("Back", Command::NavigateTo(ScreenId::System))
}

pub fn home(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    ContentArea::new()
        .heading("Home")
        .label("Welcome to Settings Simulator")
}

/// The System screen, or one of its feature pages when `params` names one.
pub fn system(_ctx: &RenderContext<'_>, params: &ScreenParams) -> ContentArea {
    match params {
        ScreenParams::Feature(name) => back_to_system(
            ContentArea::new()
                .heading(name.as_str())
                .label(format!("{name} options coming soon")),
        ),
        ScreenParams::None => SYSTEM_FEATURES.iter().fold(
            ContentArea::new().heading(ScreenId::System.label()),
            |content, feature| {
                content.button(*feature, Command::OpenSystemFeature(feature.to_string()))
            },
        ),
    }
}

pub fn display(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    back_to_system(
        ContentArea::new()
            .heading("Display")
            .button("Change Background Color", Command::ChangeBackgroundColor),
    )
}

pub fn bluetooth_devices(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    BLUETOOTH_DEVICES.iter().fold(
        ContentArea::new()
            .heading(ScreenId::BluetoothDevices.label())
            .sub_heading("Paired Bluetooth Devices"),
        |content, device| content.label(*device),
    )
}

pub fn windows_update(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    ContentArea::new()
        .heading("Windows Update")
        .update_status()
        .button("Check for Updates", Command::CheckForUpdates)
}

pub fn accounts(ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    ContentArea::new()
        .label(format!("Account: {}", ctx.identity.display_name()))
        .label("Rewards: Coming Soon")
        .label("OneDrive: Coming Soon")
}

pub fn network_internet(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    WIFI_NETWORKS.iter().fold(
        ContentArea::new().heading("Available Wi-Fi Networks"),
        |content, network| content.label(*network),
    )
}

pub fn time_language(ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    ContentArea::new()
        .heading(ScreenId::TimeLanguage.label())
        .label(format!("Current Time: {}", ctx.clock.time()))
        .label(format!("Current Date: {}", ctx.clock.date()))
        .label(format!("Time Zone: {}", ctx.clock.time_zone()))
}

pub fn gaming(_ctx: &RenderContext<'_>, _params: &ScreenParams) -> ContentArea {
    ContentArea::new()
        .heading(ScreenId::Gaming.label())
        .label("Gaming Bar: Enabled")
        .label("Game Mode: Enabled")
        .label("Captions: Enabled")
}
