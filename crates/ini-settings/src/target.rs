//! Settings objects that loaded values are written into

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mutable attribute container receiving loaded settings.
pub trait SettingsTarget {
    /// Set attribute `name`, replacing any previous value.
    fn set_attr(&mut self, name: &str, value: Value);

    /// Mutable access to an existing attribute.
    fn attr_mut(&mut self, name: &str) -> Option<&mut Value>;

    /// Read an existing attribute.
    fn get_attr(&self, name: &str) -> Option<&Value>;
}

impl SettingsTarget for Map<String, Value> {
    fn set_attr(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }

    fn attr_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.get_mut(name)
    }

    fn get_attr(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Attribute container for application settings.
///
/// # Example
///
/// ```
/// use ini_settings::{Settings, SettingsTarget};
/// use serde_json::json;
///
/// let mut settings = Settings::new();
/// settings.set_attr("DEBUG", json!(true));
/// assert_eq!(settings.get_bool("DEBUG"), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    attrs: Map<String, Value>,
}

impl Settings {
    /// Create settings with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings pre-populated from a JSON object.
    ///
    /// Returns `None` if `value` is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(attrs) => Some(Self { attrs }),
            _ => None,
        }
    }

    /// Look up an attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Look up a string attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Look up a boolean attribute.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Look up an integer attribute.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Follow a path of keys through nested mappings.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.get(first)?, |value, key| value.as_object()?.get(*key))
    }

    /// Whether attribute `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl SettingsTarget for Settings {
    fn set_attr(&mut self, name: &str, value: Value) {
        self.attrs.set_attr(name, value);
    }

    fn attr_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attrs.attr_mut(name)
    }

    fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get_attr(name)
    }
}
