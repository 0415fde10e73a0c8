// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{InteractionListener, settings::GrabDropSettings};
use bevy::prelude::*;
use tracking::{HandEventType, HandGesture, InteractionState, ManagerKey};

/// Whether a drag-style interaction is currently considered active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchState {
    Idle,
    Gripped,
}

/// Lets the user grab and release scene objects with hand gestures.
///
/// The component records the last grip or release accepted from its interaction manager and
/// folds it into the `right_click` latch once per frame.  Left-hand gestures are recorded like any
/// other, but nothing ever sets `left_click`; it only guards `right_click` from turning on.
#[derive(Component, Clone, Debug)]
pub struct GrabDrop {
    /// Material used to outline the currently selected object.
    pub selected_object_material: Option<Handle<StandardMaterial>>,
    /// Drag speed of the selected object.
    pub drag_speed: f32,
    /// Minimum Z-position of a dragged object, when moving forward and back.
    pub min_z: f32,
    /// Maximum Z-position of a dragged object, when moving forward and back.
    pub max_z: f32,
    /// Whether objects obey gravity when released.
    pub use_gravity: bool,
    /// Whether objects should be put back in their original positions.
    pub reset_objects: bool,
    /// Camera used for screen ray-casting.  Bound to the main camera on the first frame if unset.
    pub screen_camera: Option<Entity>,
    /// Entity whose [`Text`] receives status messages.
    pub info_text: Option<Entity>,
    /// Interaction manager that reports gestures for this component.  Looked up on the first frame
    /// if unset; see [`manager_key`](Self::manager_key).
    pub interaction_manager: Option<Entity>,
    /// Index of the player tracked by the interaction manager.
    pub player_index: i32,
    /// Whether left hand interaction is allowed by the interaction manager.
    pub left_hand_interaction: bool,
    /// Whether right hand interaction is allowed by the interaction manager.
    pub right_hand_interaction: bool,

    pub right_click: bool,
    pub left_click: bool,

    dragged_object: Option<Entity>,
    last_hand_event: HandEventType,
    screen_normal_pos: Vec3,
    screen_pixel_pos: Vec3,
}

impl Default for GrabDrop {
    fn default() -> Self {
        Self {
            selected_object_material: None,
            drag_speed: 3.0,
            min_z: 0.0,
            max_z: 5.0,
            use_gravity: true,
            reset_objects: false,
            screen_camera: None,
            info_text: None,
            interaction_manager: None,
            player_index: 0,
            left_hand_interaction: false,
            right_hand_interaction: true,
            right_click: false,
            left_click: false,
            dragged_object: None,
            last_hand_event: HandEventType::None,
            screen_normal_pos: Vec3::ZERO,
            screen_pixel_pos: Vec3::ZERO,
        }
    }
}

impl GrabDrop {
    pub fn from_settings(settings: &GrabDropSettings) -> Self {
        Self {
            drag_speed: settings.drag_speed,
            min_z: settings.min_z,
            max_z: settings.max_z,
            use_gravity: settings.use_gravity,
            player_index: settings.player_index,
            left_hand_interaction: settings.left_hand_interaction,
            right_hand_interaction: settings.right_hand_interaction,
            ..default()
        }
    }

    pub fn with_interaction_manager(mut self, manager: Entity) -> Self {
        self.interaction_manager = Some(manager);
        self
    }

    pub fn with_info_text(mut self, text: Entity) -> Self {
        self.info_text = Some(text);
        self
    }

    pub fn with_screen_camera(mut self, camera: Entity) -> Self {
        self.screen_camera = Some(camera);
        self
    }

    pub fn with_selected_object_material(mut self, material: Handle<StandardMaterial>) -> Self {
        self.selected_object_material = Some(material);
        self
    }

    pub fn set_use_gravity(&mut self, use_gravity: bool) {
        self.use_gravity = use_gravity;
    }

    pub fn request_object_reset(&mut self) {
        self.reset_objects = true;
    }

    /// Registry key of the interaction manager this component wants to be driven by.
    pub fn manager_key(&self) -> ManagerKey {
        ManagerKey {
            player_index: self.player_index,
            right_hand_interaction: self.right_hand_interaction,
        }
    }

    pub fn last_hand_event(&self) -> HandEventType {
        self.last_hand_event
    }

    pub fn screen_normal_pos(&self) -> Vec3 {
        self.screen_normal_pos
    }

    pub fn screen_pixel_pos(&self) -> Vec3 {
        self.screen_pixel_pos
    }

    pub fn dragged_object(&self) -> Option<Entity> {
        self.dragged_object
    }

    pub fn latch_state(&self) -> LatchState {
        if self.right_click || self.left_click {
            LatchState::Gripped
        } else {
            LatchState::Idle
        }
    }

    /// Folds the last accepted hand event into the click latches.  Does nothing until the manager
    /// reports itself initialized.
    pub fn update_latch(&mut self, manager: &InteractionState) {
        if !manager.initialized {
            return;
        }

        let right_hand_allowed = self.right_hand_interaction && manager.right_hand_primary;
        if !right_hand_allowed {
            return;
        }

        match self.last_hand_event {
            HandEventType::Grip => {
                if !self.left_click {
                    self.right_click = true;
                }
            }
            HandEventType::Release => self.right_click = false,
            HandEventType::None => {}
        }
    }

    /// Maps the normalized hand cursor onto a viewport of the given logical size.
    pub fn refresh_pixel_pos(&mut self, viewport_size: Vec2) {
        self.screen_pixel_pos = crate::camera::normal_to_pixel(self.screen_normal_pos, viewport_size);
    }

    fn record_hand_event(
        &mut self,
        event: HandEventType,
        manager: Option<&InteractionState>,
        gesture: &HandGesture,
    ) {
        if !gesture.is_hand_interacting {
            return;
        }
        let Some(manager) = manager else {
            trace!("Ignoring {:?}: no interaction manager bound", event);
            return;
        };
        if gesture.user_id != manager.user_id {
            trace!(
                "Ignoring {:?} from user {}, tracking user {}",
                event,
                gesture.user_id,
                manager.user_id
            );
            return;
        }

        self.last_hand_event = event;
        self.screen_normal_pos = gesture.screen_pos;
    }
}

impl InteractionListener for GrabDrop {
    fn hand_grip_detected(&mut self, manager: Option<&InteractionState>, gesture: &HandGesture) {
        self.record_hand_event(HandEventType::Grip, manager, gesture);
    }

    fn hand_release_detected(&mut self, manager: Option<&InteractionState>, gesture: &HandGesture) {
        self.record_hand_event(HandEventType::Release, manager, gesture);
    }

    fn hand_click_detected(&self, _gesture: &HandGesture) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: i64 = 72057594037928;

    fn tracking(user_id: i64) -> InteractionState {
        InteractionState {
            initialized: true,
            user_id,
            right_hand_primary: true,
        }
    }

    fn gesture(user_id: i64, is_hand_interacting: bool) -> HandGesture {
        HandGesture {
            user_id,
            user_index: 0,
            is_right_hand: true,
            is_hand_interacting,
            screen_pos: Vec3::new(0.25, 0.75, 1.5),
        }
    }

    #[test]
    fn defaults() {
        let grab = GrabDrop::default();
        assert_eq!(grab.drag_speed, 3.0);
        assert_eq!((grab.min_z, grab.max_z), (0.0, 5.0));
        assert!(grab.use_gravity);
        assert!(!grab.reset_objects);
        assert!(grab.right_hand_interaction);
        assert!(!grab.left_hand_interaction);
        assert_eq!(grab.last_hand_event(), HandEventType::None);
        assert_eq!(grab.latch_state(), LatchState::Idle);
        assert_eq!(grab.dragged_object(), None);
    }

    #[test]
    fn mutators() {
        let mut grab = GrabDrop::default();
        grab.set_use_gravity(false);
        grab.request_object_reset();
        assert!(!grab.use_gravity);
        assert!(grab.reset_objects);
    }

    #[test]
    fn grip_and_release_drive_the_latch() {
        let manager = tracking(USER);
        let mut grab = GrabDrop::default();

        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));
        assert_eq!(grab.last_hand_event(), HandEventType::Grip);
        assert_eq!(grab.screen_normal_pos(), Vec3::new(0.25, 0.75, 1.5));
        assert!(!grab.right_click);

        grab.update_latch(&manager);
        assert!(grab.right_click);
        assert_eq!(grab.latch_state(), LatchState::Gripped);

        grab.hand_release_detected(Some(&manager), &gesture(USER, true));
        grab.update_latch(&manager);
        assert!(!grab.right_click);
        assert_eq!(grab.latch_state(), LatchState::Idle);
    }

    #[test]
    fn left_click_blocks_right_click() {
        let manager = tracking(USER);
        let mut grab = GrabDrop {
            left_click: true,
            ..default()
        };
        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));
        grab.update_latch(&manager);
        assert!(!grab.right_click);
        assert!(grab.left_click);
    }

    #[test]
    fn latch_needs_right_hand_allowed_and_primary() {
        let mut manager = tracking(USER);
        manager.right_hand_primary = false;
        let mut grab = GrabDrop::default();
        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));
        grab.update_latch(&manager);
        assert!(!grab.right_click);

        let mut grab = GrabDrop {
            right_hand_interaction: false,
            ..default()
        };
        let manager = tracking(USER);
        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));
        grab.update_latch(&manager);
        assert!(!grab.right_click);
    }

    #[test]
    fn latch_waits_for_initialization() {
        let mut manager = tracking(USER);
        let mut grab = GrabDrop::default();
        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));

        manager.initialized = false;
        grab.update_latch(&manager);
        assert!(!grab.right_click);

        manager.initialized = true;
        grab.update_latch(&manager);
        assert!(grab.right_click);
    }

    #[test]
    fn rejected_gestures_leave_state_untouched() {
        let manager = tracking(USER);
        let mut grab = GrabDrop::default();

        grab.hand_grip_detected(Some(&manager), &gesture(USER, false));
        grab.hand_grip_detected(Some(&manager), &gesture(USER + 1, true));
        grab.hand_grip_detected(None, &gesture(USER, true));
        grab.hand_release_detected(Some(&manager), &gesture(USER, false));
        grab.hand_release_detected(Some(&manager), &gesture(0, true));
        grab.hand_release_detected(None, &gesture(USER, true));

        assert_eq!(grab.last_hand_event(), HandEventType::None);
        assert_eq!(grab.screen_normal_pos(), Vec3::ZERO);
        grab.update_latch(&manager);
        assert!(!grab.right_click);
    }

    #[test]
    fn click_is_acknowledged_without_side_effects() {
        let manager = tracking(USER);
        let mut grab = GrabDrop::default();
        grab.hand_grip_detected(Some(&manager), &gesture(USER, true));
        grab.update_latch(&manager);

        assert!(grab.hand_click_detected(&gesture(USER, true)));
        assert!(grab.hand_click_detected(&gesture(0, false)));
        assert_eq!(grab.last_hand_event(), HandEventType::Grip);
        assert_eq!(grab.screen_normal_pos(), Vec3::new(0.25, 0.75, 1.5));
        assert!(grab.right_click);
    }

    #[test]
    fn left_hand_gestures_are_recorded_but_never_set_left_click() {
        let manager = tracking(USER);
        let mut grab = GrabDrop {
            left_hand_interaction: true,
            ..default()
        };
        let left = HandGesture {
            is_right_hand: false,
            ..gesture(USER, true)
        };
        grab.hand_grip_detected(Some(&manager), &left);
        grab.update_latch(&manager);
        assert_eq!(grab.last_hand_event(), HandEventType::Grip);
        assert!(!grab.left_click);
    }

    #[test]
    fn settings_feed_configuration() {
        let settings = GrabDropSettings {
            player_index: 1,
            left_hand_interaction: true,
            right_hand_interaction: false,
            drag_speed: 5.0,
            min_z: -1.0,
            max_z: 8.0,
            use_gravity: false,
        };
        let grab = GrabDrop::from_settings(&settings);
        assert_eq!(grab.player_index, 1);
        assert!(grab.left_hand_interaction);
        assert!(!grab.right_hand_interaction);
        assert_eq!(grab.drag_speed, 5.0);
        assert_eq!((grab.min_z, grab.max_z), (-1.0, 8.0));
        assert!(!grab.use_gravity);
        assert_eq!(
            grab.manager_key(),
            ManagerKey {
                player_index: 1,
                right_hand_interaction: false,
            }
        );
    }
}

// End of File
