// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use app_config::{AppConfig, SettingValue, load_group, save_record_to_db};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Settings store group holding [`GrabDropSettings`].
pub const SETTINGS_GROUP: &str = "grab_drop";

#[derive(Debug, ThisError)]
pub enum SettingsError {
    #[error("settings storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("setting `{name}` holds a {found}, expected a {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// The persisted part of a [`GrabDrop`](crate::GrabDrop) configuration.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrabDropSettings {
    pub player_index: i32,
    pub left_hand_interaction: bool,
    pub right_hand_interaction: bool,
    pub drag_speed: f32,
    pub min_z: f32,
    pub max_z: f32,
    pub use_gravity: bool,
}

impl Default for GrabDropSettings {
    fn default() -> Self {
        Self {
            player_index: 0,
            left_hand_interaction: false,
            right_hand_interaction: true,
            drag_speed: 3.0,
            min_z: 0.0,
            max_z: 5.0,
            use_gravity: true,
        }
    }
}

fn read<T>(
    group: &HashMap<String, SettingValue>,
    name: &'static str,
    expected: &'static str,
    default: T,
    convert: impl Fn(&SettingValue) -> Option<T>,
) -> Result<T, SettingsError> {
    match group.get(name) {
        None => Ok(default),
        Some(value) => convert(value).ok_or(SettingsError::WrongType {
            name,
            expected,
            found: value.type_as_string(),
        }),
    }
}

impl GrabDropSettings {
    /// Builds settings from a loaded group.  Missing entries keep their defaults.
    pub fn from_group(group: &HashMap<String, SettingValue>) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        Ok(Self {
            player_index: read(
                group,
                "player_index",
                "int",
                defaults.player_index,
                SettingValue::as_int,
            )?,
            left_hand_interaction: read(
                group,
                "left_hand_interaction",
                "bool",
                defaults.left_hand_interaction,
                SettingValue::as_bool,
            )?,
            right_hand_interaction: read(
                group,
                "right_hand_interaction",
                "bool",
                defaults.right_hand_interaction,
                SettingValue::as_bool,
            )?,
            drag_speed: read(
                group,
                "drag_speed",
                "float",
                defaults.drag_speed,
                SettingValue::as_float,
            )?,
            min_z: read(group, "min_z", "float", defaults.min_z, SettingValue::as_float)?,
            max_z: read(group, "max_z", "float", defaults.max_z, SettingValue::as_float)?,
            use_gravity: read(
                group,
                "use_gravity",
                "bool",
                defaults.use_gravity,
                SettingValue::as_bool,
            )?,
        })
    }

    pub fn load(app_config: &AppConfig) -> Result<Self, SettingsError> {
        let group = load_group(app_config, SETTINGS_GROUP)?;
        Self::from_group(&group)
    }

    pub fn save(&self, app_config: &AppConfig) -> Result<(), SettingsError> {
        let records = [
            ("player_index", SettingValue::Int(self.player_index)),
            ("left_hand_interaction", SettingValue::Bool(self.left_hand_interaction)),
            ("right_hand_interaction", SettingValue::Bool(self.right_hand_interaction)),
            ("drag_speed", SettingValue::Float(self.drag_speed)),
            ("min_z", SettingValue::Float(self.min_z)),
            ("max_z", SettingValue::Float(self.max_z)),
            ("use_gravity", SettingValue::Bool(self.use_gravity)),
        ];

        for (name, value) in &records {
            save_record_to_db(app_config, SETTINGS_GROUP, name, value)?;
        }

        Ok(())
    }

    /// Loads the stored settings, falling back to defaults on any error.  The defaults are written
    /// back to the store when it holds no settings yet, so they can be edited in place.
    pub fn load_or_default(app_config: &AppConfig) -> Self {
        if app_config.db_path.is_none() {
            return Self::default();
        }

        match load_group(app_config, SETTINGS_GROUP) {
            Ok(group) if group.is_empty() => {
                let settings = Self::default();
                if let Err(err) = settings.save(app_config) {
                    warn!("Could not store default grab settings: {}", err);
                }
                settings
            }
            Ok(group) => Self::from_group(&group).unwrap_or_else(|err| {
                warn!("Invalid grab settings, using defaults: {}", err);
                Self::default()
            }),
            Err(err) => {
                warn!("Could not load grab settings, using defaults: {}", err);
                Self::default()
            }
        }
    }
}


// End of File
