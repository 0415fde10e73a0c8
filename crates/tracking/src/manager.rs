// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// Static configuration of an interaction manager.  Changes to this component cause the
/// [`InteractionManagerRegistry`](crate::InteractionManagerRegistry) to be rebuilt, so per-frame
/// tracking output lives in [`InteractionState`] instead.
#[derive(Component, Clone, Debug, PartialEq, Reflect)]
pub struct InteractionManager {
    /// Which tracked body this manager follows.  0 is the first player, 1 the second, and so on.
    pub player_index: i32,
    pub left_hand_interaction: bool,
    pub right_hand_interaction: bool,
    /// Disabled managers are not offered to listeners.
    pub enabled: bool,
}

impl Default for InteractionManager {
    fn default() -> Self {
        Self {
            player_index: 0,
            left_hand_interaction: false,
            right_hand_interaction: true,
            enabled: true,
        }
    }
}

impl InteractionManager {
    pub fn key(&self) -> ManagerKey {
        ManagerKey {
            player_index: self.player_index,
            right_hand_interaction: self.right_hand_interaction,
        }
    }
}

/// Tracking output of an interaction manager, refreshed by the backend every frame.
#[derive(Component, Clone, Debug, Default, PartialEq, Reflect)]
pub struct InteractionState {
    /// Whether the manager finished initializing and its other fields are meaningful.
    pub initialized: bool,
    /// The user currently followed by this manager, 0 when nobody is tracked.
    pub user_id: i64,
    /// Whether the right hand is the active interacting hand of the tracked user.
    pub right_hand_primary: bool,
}

/// Lookup key for interaction managers.  Two managers with the same key are interchangeable from
/// a listener's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManagerKey {
    pub player_index: i32,
    pub right_hand_interaction: bool,
}

/// Health of the skeletal-tracking sensor behind the interaction managers.  Absent when no
/// skeletal tracking is installed at all.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SkeletalTracker {
    pub initialized: bool,
}

// End of File
