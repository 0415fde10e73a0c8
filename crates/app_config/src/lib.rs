// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Persistent Settings Store
//!
//! Settings are kept in a small sqlite3 database in the per-user configuration directory, one row
//! per setting, addressed by a group name and a setting name.  Callers load a whole group at once
//! with [`load_group`] and write individual records back with [`save_record_to_db`].
//!
//! Persistence is only available on desktop platforms.  Elsewhere groups load empty and saves are
//! silently dropped, so callers fall back to their defaults.

use bevy::prelude::*;
use rusqlite::Result as SqliteResult;
use std::collections::HashMap;
use std::path::PathBuf;

mod setting_value;
pub use setting_value::SettingValue;

/// File name of the settings database inside the configuration directory.
pub const DB_FILE_NAME: &str = "settings.sqlite3";

#[derive(Resource, Debug, Default, Clone)]
pub struct AppConfig {
    /// sqlite connection path.  `None` when no storage could be set up, in which case nothing is
    /// persisted.
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Creates a config pointing at the default database location.  See
    /// [`set_db_path`](Self::set_db_path).
    pub fn new() -> Self {
        let mut app_config = Self::default();
        app_config.set_db_path();
        app_config
    }

    /// Creates a config pointing at an explicit database file.  The parent directory must exist.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(path.into()),
        }
    }

    /// Resolves the database path in the platform configuration directory, creating the directory
    /// if needed.  On failure the path is reset to `None`.
    pub fn set_db_path(&mut self) {
        let config_dir = directories::ProjectDirs::from("org", "grabdrop", "grabdrop")
            .map(|dirs| dirs.config_dir().to_owned())
            .unwrap_or_else(|| PathBuf::from("."));
        self.db_path = Some(config_dir.join(DB_FILE_NAME));

        if !config_dir.exists() {
            if let Err(err) = std::fs::create_dir_all(&config_dir) {
                self.db_path = None;
                error!(
                    "Failed to create config directory {}: {}",
                    config_dir.display(),
                    err
                );
                warn!("AppConfig will not be persisted as no storage can be created.");
            }
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn open_connection(app_config: &AppConfig) -> SqliteResult<rusqlite::Connection> {
    let conn = match app_config.db_path.as_ref() {
        Some(path) => rusqlite::Connection::open(path),
        None => {
            let err_msg = "Abort, no database path set!";
            error!("{}", err_msg);
            return Err(rusqlite::Error::InvalidPath(err_msg.into()));
        }
    }?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            group_name TEXT NOT NULL,
            name TEXT NOT NULL,
            value TEXT NOT NULL,
            value_type TEXT NOT NULL,
            PRIMARY KEY (group_name, name)
        )",
        (),
    )?;

    Ok(conn)
}

/// Loads every setting of a group.  Rows whose stored text no longer parses as their recorded type
/// are skipped with a warning rather than failing the whole group.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub fn load_group(
    app_config: &AppConfig,
    group_name: &str,
) -> SqliteResult<HashMap<String, SettingValue>> {
    let conn = open_connection(app_config)?;

    const SQL: &str = "SELECT name, value, value_type FROM settings WHERE group_name = ?1";
    let mut stmt = conn.prepare(SQL)?;
    let rows = stmt.query_map([group_name], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut group = HashMap::new();
    for row in rows {
        let (name, value, value_type) = row?;
        match SettingValue::parse(&value, &value_type) {
            Some(setting) => {
                group.insert(name, setting);
            }
            None => warn!(
                "Ignoring setting {}.{}: cannot read {:?} as {}",
                group_name, name, value, value_type
            ),
        }
    }

    Ok(group)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn load_group(
    _app_config: &AppConfig,
    _group_name: &str,
) -> SqliteResult<HashMap<String, SettingValue>> {
    Ok(HashMap::new())
}

/// Inserts or replaces a single setting.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub fn save_record_to_db(
    app_config: &AppConfig,
    group_name: &str,
    name: &str,
    value: &SettingValue,
) -> SqliteResult<()> {
    let conn = open_connection(app_config)?;

    const SQL: &str =
        "INSERT OR REPLACE INTO settings (group_name, name, value, value_type) VALUES (?1, ?2, ?3, ?4)";
    let params = rusqlite::params![group_name, name, value.to_string(), value.type_as_string()];
    conn.execute(SQL, params)?;

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn save_record_to_db(
    _app_config: &AppConfig,
    _group_name: &str,
    _name: &str,
    _value: &SettingValue,
) -> SqliteResult<()> {
    Ok(())
}


// End of File
