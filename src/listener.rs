// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Defines the [`InteractionListener`] trait, implemented by anything that reacts to hand
//! gestures reported by an interaction manager.
//!
//! Listeners do not read the gesture channel themselves.  The dispatch system drains
//! [`HandGestureEvent`](tracking::HandGestureEvent)s in order and calls these methods, handing
//! each listener the state of the manager it is bound to.

use tracking::{HandGesture, InteractionState};

pub trait InteractionListener {
    /// Called when a hand closes.
    ///
    /// - `manager`: state of the listener's bound interaction manager, `None` if it has none or
    ///   the manager no longer exists.
    fn hand_grip_detected(&mut self, manager: Option<&InteractionState>, gesture: &HandGesture);

    /// Called when a hand opens.  Same arguments as
    /// [`hand_grip_detected`](Self::hand_grip_detected).
    fn hand_release_detected(&mut self, manager: Option<&InteractionState>, gesture: &HandGesture);

    /// Called on a click gesture.  Returns whether the click was acknowledged.
    fn hand_click_detected(&self, gesture: &HandGesture) -> bool;
}

// End of File
