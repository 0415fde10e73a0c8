// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{APP_NAME, DemoScenePlugin, DemoTrackerPlugin, GrabDropPlugin, GrabDropSettings};
use app_config::AppConfig;
use bevy::{prelude::*, window::PresentMode};
use tracking::TrackingPlugin;

pub fn start() {
    let app_config = AppConfig::new();
    let settings = GrabDropSettings::load_or_default(&app_config);

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: APP_NAME.into(),
            present_mode: PresentMode::AutoNoVsync,
            canvas: Some("#bevy".to_owned()), // For web; no effect elsewhere.
            prevent_default_event_handling: true, // Capture browser hotkeys.
            ..default()
        }),
        ..default()
    };

    App::new()
        .insert_resource(app_config)
        .insert_resource(settings)
        .add_plugins(DefaultPlugins.set(window_plugin))
        .add_plugins((TrackingPlugin, GrabDropPlugin, DemoTrackerPlugin, DemoScenePlugin))
        .run();
}

// End of File
