// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Hand-Tracking Collaborators
//!
//! The data a hand-tracking backend shares with the rest of the app.  A backend (a depth-camera
//! driver, a replay file, or a keyboard stand-in) owns one entity per interaction manager,
//! carrying an [`InteractionManager`] configuration and an [`InteractionState`] it refreshes every
//! frame.  It reports detected gestures by sending [`HandGestureEvent`]s, and publishes sensor
//! health through the optional [`SkeletalTracker`] resource.
//!
//! Consumers never search the world for managers.  The [`InteractionManagerRegistry`] resource is
//! kept current by [`TrackingPlugin`] and answers lookups by [`ManagerKey`].

mod gesture;
pub use gesture::{HandEventType, HandGesture, HandGestureEvent};

mod manager;
pub use manager::{InteractionManager, InteractionState, ManagerKey, SkeletalTracker};

mod registry;
pub use registry::{InteractionManagerRegistry, refresh_manager_registry};

use bevy::prelude::*;

/// Registers the gesture event channel, the collaborator types, and keeps the manager registry in
/// sync with the world.  The registry is refreshed in [`PreUpdate`], so managers spawned at any
/// point are visible to lookups made during the following [`Update`].
pub struct TrackingPlugin;

impl Plugin for TrackingPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<InteractionManager>()
            .register_type::<InteractionState>()
            .register_type::<HandEventType>();

        app.init_resource::<InteractionManagerRegistry>()
            .add_event::<HandGestureEvent>()
            .add_systems(PreUpdate, refresh_manager_registry);
    }
}

/// Most commonly used types, suitable for glob import.
pub mod prelude {
    pub use crate::{
        HandEventType, HandGesture, HandGestureEvent, InteractionManager,
        InteractionManagerRegistry, InteractionState, ManagerKey, SkeletalTracker, TrackingPlugin,
    };
}

// End of File
