// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{DemoTracked, GrabDrop, GrabDropSettings, MainCamera};
use bevy::prelude::*;
use tracking::{InteractionManager, InteractionState};

/// Populates the demo window: a camera, a light, a few cubes to grab, one keyboard-driven
/// interaction manager, a status line, and a [`GrabDrop`] configured from [`GrabDropSettings`].
pub struct DemoScenePlugin;

impl Plugin for DemoScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrabDropSettings>()
            .add_systems(Startup, setup_demo_scene);
    }
}

fn setup_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GrabDropSettings>,
) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 2.5, 8.0)
                .looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
            ..default()
        },
        MainCamera,
    ));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0),
        ..default()
    });

    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(12.0, 0.1, 12.0)),
        material: materials.add(Color::rgb(0.3, 0.5, 0.3)),
        transform: Transform::from_xyz(0.0, -0.05, 0.0),
        ..default()
    });

    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    for (index, color) in [
        Color::rgb(0.8, 0.3, 0.3),
        Color::rgb(0.3, 0.3, 0.8),
        Color::rgb(0.8, 0.7, 0.3),
    ]
    .into_iter()
    .enumerate()
    {
        commands.spawn(PbrBundle {
            mesh: cube.clone(),
            material: materials.add(color),
            transform: Transform::from_xyz(index as f32 * 2.0 - 2.0, 0.5, settings.min_z),
            ..default()
        });
    }

    // Interaction manager matching the configured player and hand, fed by the demo tracker.
    commands.spawn((
        InteractionManager {
            player_index: settings.player_index,
            left_hand_interaction: settings.left_hand_interaction,
            right_hand_interaction: settings.right_hand_interaction,
            enabled: true,
        },
        InteractionState {
            initialized: true,
            user_id: 0,
            right_hand_primary: true,
        },
        DemoTracked,
    ));

    let info_text = commands
        .spawn(
            TextBundle::from_section(
                "",
                TextStyle {
                    font_size: 24.0,
                    color: Color::WHITE,
                    ..default()
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            }),
        )
        .id();

    let highlight = materials.add(Color::rgb(1.0, 0.9, 0.2));
    commands.spawn(
        GrabDrop::from_settings(&settings)
            .with_info_text(info_text)
            .with_selected_object_material(highlight),
    );
}

// End of File
