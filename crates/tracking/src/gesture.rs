// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// The most recent hand state a listener has accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum HandEventType {
    #[default]
    None,
    Grip,
    Release,
}

/// What the tracker knows about a detected hand gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandGesture {
    /// Tracked user the hand belongs to.  Zero is never a valid user.
    pub user_id: i64,
    /// Index of the user among the tracked bodies.
    pub user_index: i32,
    pub is_right_hand: bool,
    /// Whether the tracker considers the hand to be driving interaction, rather than incidental
    /// motion.
    pub is_hand_interacting: bool,
    /// Hand cursor position in normalized screen coordinates: `x` and `y` in `0.0..=1.0` with the
    /// origin at the top-left of the viewport.  `z` is the hand depth as reported by the tracker.
    pub screen_pos: Vec3,
}

/// Gestures sent by a tracking backend, in the order it detected them.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum HandGestureEvent {
    /// A hand closed.
    Grip(HandGesture),
    /// A hand opened.
    Release(HandGesture),
    /// A push or click motion.
    Click(HandGesture),
}

impl HandGestureEvent {
    pub fn gesture(&self) -> &HandGesture {
        match self {
            HandGestureEvent::Grip(gesture)
            | HandGestureEvent::Release(gesture)
            | HandGestureEvent::Click(gesture) => gesture,
        }
    }

    /// The latch-relevant kind of the event.  Clicks do not change hand state and map to
    /// [`HandEventType::None`].
    pub fn hand_event_type(&self) -> HandEventType {
        match self {
            HandGestureEvent::Grip(_) => HandEventType::Grip,
            HandGestureEvent::Release(_) => HandEventType::Release,
            HandGestureEvent::Click(_) => HandEventType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds() {
        let gesture = HandGesture {
            user_id: 4,
            user_index: 0,
            is_right_hand: true,
            is_hand_interacting: true,
            screen_pos: Vec3::new(0.5, 0.5, 1.2),
        };
        assert_eq!(HandGestureEvent::Grip(gesture).hand_event_type(), HandEventType::Grip);
        assert_eq!(
            HandGestureEvent::Release(gesture).hand_event_type(),
            HandEventType::Release
        );
        assert_eq!(HandGestureEvent::Click(gesture).hand_event_type(), HandEventType::None);
        assert_eq!(HandGestureEvent::Click(gesture).gesture().user_id, 4);
    }
}

// End of File
