// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use bevy::{prelude::*, window::PrimaryWindow};
use tracking::{HandGesture, HandGestureEvent, InteractionState, SkeletalTracker};

use crate::GrabDropSet;
use crate::actions::key_command::{KeyCommand, just_pressed_commands};

mod key_command;

/// User id reported for the simulated player while tracked.
pub const DEMO_USER_ID: i64 = 1;

/// Marks interaction managers driven by [`DemoTrackerPlugin`].
#[derive(Component, Debug, Default)]
pub struct DemoTracked;

/// Stands in for a depth camera.  Keyboard commands toggle tracking state and emit hand gestures
/// at the mouse cursor, for every interaction manager tagged [`DemoTracked`].
pub struct DemoTrackerPlugin;

impl Plugin for DemoTrackerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SkeletalTracker { initialized: true })
            .add_systems(
                Update,
                drive_demo_tracker
                    .after(GrabDropSet::Bind)
                    .before(GrabDropSet::Dispatch),
            );
    }
}

/// Normalized cursor position of the primary window, or its center when the cursor is outside.
fn hand_cursor(window: Option<&Window>) -> Vec3 {
    let Some(window) = window else {
        return Vec3::new(0.5, 0.5, 0.0);
    };
    match window.cursor_position() {
        Some(cursor) if window.width() > 0.0 && window.height() > 0.0 => Vec3::new(
            cursor.x / window.width(),
            cursor.y / window.height(),
            0.0,
        ),
        _ => Vec3::new(0.5, 0.5, 0.0),
    }
}

pub fn drive_demo_tracker(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut managers: Query<&mut InteractionState, With<DemoTracked>>,
    mut skeletal: Option<ResMut<SkeletalTracker>>,
    mut gestures: EventWriter<HandGestureEvent>,
) {
    let commands = just_pressed_commands(&keyboard_input);
    if commands.is_empty() {
        return;
    }

    let screen_pos = hand_cursor(windows.get_single().ok());

    for command in commands {
        match command {
            KeyCommand::ToggleSensor => {
                if let Some(skeletal) = skeletal.as_mut() {
                    skeletal.initialized = !skeletal.initialized;
                    info!("Skeletal tracker initialized: {}", skeletal.initialized);
                }
            }
            KeyCommand::ToggleUser => {
                for mut state in &mut managers {
                    state.user_id = if state.user_id == 0 { DEMO_USER_ID } else { 0 };
                    info!("Tracked user: {}", state.user_id);
                }
            }
            KeyCommand::SwapPrimaryHand => {
                for mut state in &mut managers {
                    state.right_hand_primary = !state.right_hand_primary;
                    info!("Right hand primary: {}", state.right_hand_primary);
                }
            }
            KeyCommand::Grip | KeyCommand::Release | KeyCommand::Click => {
                for state in &managers {
                    let gesture = HandGesture {
                        user_id: state.user_id,
                        user_index: 0,
                        is_right_hand: state.right_hand_primary,
                        is_hand_interacting: state.user_id != 0,
                        screen_pos,
                    };
                    gestures.send(match command {
                        KeyCommand::Grip => HandGestureEvent::Grip(gesture),
                        KeyCommand::Release => HandGestureEvent::Release(gesture),
                        _ => HandGestureEvent::Click(gesture),
                    });
                }
            }
        }
    }
}


// End of File
