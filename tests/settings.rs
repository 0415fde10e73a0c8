// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

#![cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]

use app_config::{AppConfig, DB_FILE_NAME, SettingValue, load_group, save_record_to_db};
use grabdrop::{GrabDropSettings, SETTINGS_GROUP, SettingsError};

fn temp_config() -> (tempfile::TempDir, AppConfig) {
    let dir = tempfile::tempdir().unwrap();
    let app_config = AppConfig::with_db_path(dir.path().join(DB_FILE_NAME));
    (dir, app_config)
}

#[test]
fn first_load_seeds_defaults() {
    let (_dir, app_config) = temp_config();

    let settings = GrabDropSettings::load_or_default(&app_config);
    assert_eq!(settings, GrabDropSettings::default());

    let group = load_group(&app_config, SETTINGS_GROUP).unwrap();
    assert_eq!(group.len(), 7);
    assert_eq!(group.get("right_hand_interaction"), Some(&SettingValue::Bool(true)));
    assert_eq!(group.get("drag_speed"), Some(&SettingValue::Float(3.0)));
}

#[test]
fn stored_settings_are_loaded() {
    let (_dir, app_config) = temp_config();
    let stored = GrabDropSettings {
        player_index: 1,
        left_hand_interaction: true,
        use_gravity: false,
        ..Default::default()
    };
    stored.save(&app_config).unwrap();

    assert_eq!(GrabDropSettings::load(&app_config).unwrap(), stored);
    assert_eq!(GrabDropSettings::load_or_default(&app_config), stored);
}

#[test]
fn mistyped_settings_fall_back_to_defaults() {
    let (_dir, app_config) = temp_config();
    save_record_to_db(
        &app_config,
        SETTINGS_GROUP,
        "player_index",
        &SettingValue::String("first".into()),
    )
    .unwrap();

    assert!(matches!(
        GrabDropSettings::load(&app_config),
        Err(SettingsError::WrongType {
            name: "player_index",
            ..
        })
    ));
    assert_eq!(
        GrabDropSettings::load_or_default(&app_config),
        GrabDropSettings::default()
    );
}

#[test]
fn no_storage_means_defaults() {
    let app_config = AppConfig::default();
    assert!(matches!(
        GrabDropSettings::load(&app_config),
        Err(SettingsError::Storage(_))
    ));
    assert_eq!(
        GrabDropSettings::load_or_default(&app_config),
        GrabDropSettings::default()
    );
}

// End of File
