// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed value as kept in the settings store.  Values are stored as text alongside the
/// name of their type, see [`type_as_string`](Self::type_as_string) and [`parse`](Self::parse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl SettingValue {
    pub fn type_as_string(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
        }
    }

    /// Reconstructs a value from its stored text and type name.  Returns `None` if the type name
    /// is unknown or the text does not parse as that type.
    pub fn parse(value: &str, value_type: &str) -> Option<Self> {
        match value_type {
            "bool" => value.parse().ok().map(SettingValue::Bool),
            "int" => value.parse().ok().map(SettingValue::Int),
            "float" => value.parse().ok().map(SettingValue::Float),
            "string" => Some(SettingValue::String(value.to_owned())),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers widen to floats; a setting entered as `3` is a valid float setting.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(value) => Some(*value),
            SettingValue::Int(value) => Some(*value as f32),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{}", value),
            SettingValue::Int(value) => write!(f, "{}", value),
            SettingValue::Float(value) => write!(f, "{}", value),
            SettingValue::String(value) => write!(f, "{}", value),
        }
    }
}


// End of File
