// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    GrabDrop, InteractionListener,
    camera::{MainCamera, main_camera},
    status::update_status_text,
};
use bevy::prelude::*;
use tracking::{HandGestureEvent, InteractionManagerRegistry, InteractionState, TrackingPlugin};

/// Stages of [`GrabDrop`] processing within [`Update`], in execution order.  Tracking backends
/// that emit [`HandGestureEvent`]s should run before [`GrabDropSet::Dispatch`] to have their
/// gestures applied in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrabDropSet {
    /// Binds newly added components to their interaction manager and screen camera.
    Bind,
    /// Feeds queued gestures to listeners.
    Dispatch,
    /// Folds the last accepted gesture into the click latches.
    Latch,
}

/// Drives [`GrabDrop`] components from hand gestures and keeps their status text current.  Adds
/// [`TrackingPlugin`] if it is not already present.
pub struct GrabDropPlugin;

impl Plugin for GrabDropPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TrackingPlugin>() {
            app.add_plugins(TrackingPlugin);
        }

        app.configure_sets(
            Update,
            (GrabDropSet::Bind, GrabDropSet::Dispatch, GrabDropSet::Latch).chain(),
        )
        .add_systems(
            Update,
            (
                bind_grab_drop.in_set(GrabDropSet::Bind),
                dispatch_hand_gestures.in_set(GrabDropSet::Dispatch),
                update_gesture_latch.in_set(GrabDropSet::Latch),
            ),
        )
        .add_systems(PostUpdate, update_status_text);
    }
}

/// Resolves the interaction manager and screen camera of components added since the last run.
/// Lookups happen once; a component that finds no manager stays unbound.
pub fn bind_grab_drop(
    registry: Res<InteractionManagerRegistry>,
    mut added: Query<(Entity, &mut GrabDrop), Added<GrabDrop>>,
    cameras: Query<(Entity, &Camera), With<MainCamera>>,
) {
    for (entity, mut grab) in &mut added {
        if grab.screen_camera.is_none() {
            grab.screen_camera = main_camera(cameras.iter());
            debug!("{:?} uses screen camera {:?}", entity, grab.screen_camera);
        }

        if grab.interaction_manager.is_none() {
            let key = grab.manager_key();
            grab.interaction_manager = registry.find(key);
            match grab.interaction_manager {
                Some(manager) => info!("{:?} bound to interaction manager {:?}", entity, manager),
                None => warn!(
                    "{:?} found no interaction manager for player {} (right hand interaction: {})",
                    entity, key.player_index, key.right_hand_interaction
                ),
            }
        }
    }
}

/// Drains the gesture channel in send order, offering every gesture to every listener.
pub fn dispatch_hand_gestures(
    mut gestures: EventReader<HandGestureEvent>,
    mut listeners: Query<(Entity, &mut GrabDrop)>,
    managers: Query<&InteractionState>,
) {
    for event in gestures.read() {
        for (entity, mut listener) in &mut listeners {
            let manager = listener
                .interaction_manager
                .and_then(|manager| managers.get(manager).ok());
            match event {
                HandGestureEvent::Grip(gesture) => listener.hand_grip_detected(manager, gesture),
                HandGestureEvent::Release(gesture) => {
                    listener.hand_release_detected(manager, gesture)
                }
                HandGestureEvent::Click(gesture) => {
                    let acknowledged = listener.hand_click_detected(gesture);
                    trace!("{:?} click acknowledged: {}", entity, acknowledged);
                }
            }
        }
    }
}

/// Runs the per-frame latch update and refreshes the pixel position of the hand cursor.
pub fn update_gesture_latch(
    mut listeners: Query<(Entity, &mut GrabDrop)>,
    managers: Query<&InteractionState>,
    cameras: Query<&Camera>,
) {
    for (entity, mut grab) in &mut listeners {
        let viewport_size = grab
            .screen_camera
            .and_then(|camera| cameras.get(camera).ok())
            .and_then(Camera::logical_viewport_size);
        if let Some(viewport_size) = viewport_size {
            grab.refresh_pixel_pos(viewport_size);
        }

        let Some(manager) = grab
            .interaction_manager
            .and_then(|manager| managers.get(manager).ok())
        else {
            continue;
        };

        let before = grab.latch_state();
        grab.update_latch(manager);
        let after = grab.latch_state();
        if before != after {
            debug!(
                "{:?} latch {:?} -> {:?} at {}",
                entity,
                before,
                after,
                grab.screen_pixel_pos()
            );
        }
    }
}

// End of File
