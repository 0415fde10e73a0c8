// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::GrabDrop;
use bevy::prelude::*;
use tracking::{InteractionState, SkeletalTracker};

pub const WAITING_FOR_USERS: &str = "Waiting for Users...";
pub const SENSOR_NOT_INITIALIZED: &str = "Kinect is not initialized. Check the log for details.";

/// The status line shown for a listener whose manager is initialized.
///
/// While a user is tracked the line is empty, whatever the click state.  Without a user it
/// reports whether the skeletal tracker behind the manager is running.
pub fn status_text(manager: &InteractionState, skeletal: Option<&SkeletalTracker>) -> &'static str {
    if manager.user_id != 0 {
        return "";
    }

    match skeletal {
        Some(skeletal) if skeletal.initialized => WAITING_FOR_USERS,
        _ => SENSOR_NOT_INITIALIZED,
    }
}

/// Rewrites the status text of every listener with a bound text target, every frame.
pub fn update_status_text(
    listeners: Query<&GrabDrop>,
    managers: Query<&InteractionState>,
    skeletal: Option<Res<SkeletalTracker>>,
    mut texts: Query<&mut Text>,
) {
    for grab in &listeners {
        let Some(text_entity) = grab.info_text else {
            continue;
        };
        let Some(manager) = grab
            .interaction_manager
            .and_then(|entity| managers.get(entity).ok())
        else {
            continue;
        };
        if !manager.initialized {
            continue;
        }
        let Ok(mut text) = texts.get_mut(text_entity) else {
            continue;
        };

        let info = status_text(manager, skeletal.as_deref());
        match text.sections.first_mut() {
            Some(section) => {
                section.value.clear();
                section.value.push_str(info);
            }
            None => text
                .sections
                .push(TextSection::new(info, TextStyle::default())),
        }
    }
}


// End of File
