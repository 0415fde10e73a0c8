// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # grabdrop
//!
//! Grab and release scene objects with hand gestures reported by a depth-sensing camera.
//!
//! A [`GrabDrop`] component listens to the gestures of one interaction manager, matched by player
//! index and right-hand configuration, and keeps a small latch telling whether a drag-style
//! interaction is active.  [`GrabDropPlugin`] wires the component into the schedule; the
//! hand-tracking side of the contract lives in the `tracking` crate.

mod actions;
pub use actions::{DemoTracked, DemoTrackerPlugin};

mod camera;
pub use camera::{MainCamera, normal_to_pixel};

mod grab_drop;
pub use grab_drop::{GrabDrop, LatchState};

mod listener;
pub use listener::InteractionListener;

mod plugin;
pub use plugin::{GrabDropPlugin, GrabDropSet};

mod scene;
pub use scene::DemoScenePlugin;

mod settings;
pub use settings::{GrabDropSettings, SETTINGS_GROUP, SettingsError};

mod start;
pub use start::start;

mod status;
pub use status::{SENSOR_NOT_INITIALIZED, WAITING_FOR_USERS, status_text};

pub const APP_NAME: &str = "grabdrop";

// End of File
