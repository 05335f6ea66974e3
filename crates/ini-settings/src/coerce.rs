//! Coercion of raw INI strings into typed setting values

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// How a raw value is coerced and where it is written.
///
/// The kind also selects the apply strategy: [`SettingKind::DictItem`]
/// writes into a nested mapping, every other kind sets a plain attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Value is kept as text
    String,
    /// `true` in any letter case is true, everything else is false
    Bool,
    /// Base-10 signed integer
    Int,
    /// Text value written into a nested mapping
    DictItem,
}

impl SettingKind {
    /// All kinds, in display order.
    pub const ALL: [SettingKind; 4] = [
        SettingKind::String,
        SettingKind::Bool,
        SettingKind::DictItem,
        SettingKind::Int,
    ];

    /// Stable lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::String => "string",
            SettingKind::Bool => "bool",
            SettingKind::Int => "int",
            SettingKind::DictItem => "dict_item",
        }
    }

    /// Whether values of this kind are written into a nested mapping.
    pub fn is_nested(&self) -> bool {
        matches!(self, SettingKind::DictItem)
    }

    /// Coerce `raw` according to this kind. See [`coerce`].
    pub fn coerce(&self, raw: &str) -> std::result::Result<Value, ParseIntError> {
        coerce(*self, raw)
    }
}

impl FromStr for SettingKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "str" => Ok(SettingKind::String),
            "bool" | "boolean" => Ok(SettingKind::Bool),
            "int" | "integer" => Ok(SettingKind::Int),
            "dict_item" | "dict-item" => Ok(SettingKind::DictItem),
            _ => Err(Error::UnknownKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a raw string value into a typed value.
///
/// Only integer coercion can fail. Boolean coercion is lenient: anything
/// other than `true` (ignoring case) is `false`.
pub fn coerce(kind: SettingKind, raw: &str) -> std::result::Result<Value, ParseIntError> {
    match kind {
        SettingKind::String | SettingKind::DictItem => Ok(Value::String(raw.to_string())),
        SettingKind::Bool => Ok(Value::Bool(raw.eq_ignore_ascii_case("true"))),
        SettingKind::Int => raw.parse::<i64>().map(Value::from),
    }
}
