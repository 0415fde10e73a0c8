// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// Marks the camera used for screen ray-casting when a [`GrabDrop`](crate::GrabDrop) is not given
/// one explicitly.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

/// Picks the main camera: the lowest active camera entity tagged [`MainCamera`].
pub fn main_camera<'a>(cameras: impl IntoIterator<Item = (Entity, &'a Camera)>) -> Option<Entity> {
    cameras
        .into_iter()
        .filter(|(_, camera)| camera.is_active)
        .map(|(entity, _)| entity)
        .min()
}

/// Scales a normalized screen position (origin top-left, `0.0..=1.0`) to logical viewport pixels.
/// Depth passes through unchanged.
pub fn normal_to_pixel(normal: Vec3, viewport_size: Vec2) -> Vec3 {
    Vec3::new(
        normal.x * viewport_size.x,
        normal.y * viewport_size.y,
        normal.z,
    )
}


// End of File
