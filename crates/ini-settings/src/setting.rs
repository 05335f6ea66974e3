//! Setting descriptors
//!
//! A [`Setting`] pairs a target-name strategy with a [`SettingKind`]. The
//! kind decides how the raw INI value is coerced and whether it lands in a
//! plain attribute or inside a nested mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::SettingKind;
use crate::error::{Error, Result};
use crate::target::SettingsTarget;

/// Where a setting is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetSpec {
    /// A fixed attribute name
    Name(String),
    /// A fixed path: attribute name followed by nested mapping keys
    Path(Vec<String>),
    /// The option name, verbatim
    Option,
    /// The option name, upper-cased
    OptionUpper,
}

impl From<&str> for TargetSpec {
    fn from(name: &str) -> Self {
        TargetSpec::Name(name.to_string())
    }
}

impl From<String> for TargetSpec {
    fn from(name: String) -> Self {
        TargetSpec::Name(name)
    }
}

impl<const N: usize> From<[&str; N]> for TargetSpec {
    fn from(path: [&str; N]) -> Self {
        TargetSpec::Path(path.iter().map(|key| key.to_string()).collect())
    }
}

impl From<Vec<String>> for TargetSpec {
    fn from(path: Vec<String>) -> Self {
        TargetSpec::Path(path)
    }
}

impl std::fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetSpec::Name(name) => f.write_str(name),
            TargetSpec::Path(path) => f.write_str(&path.join(".")),
            TargetSpec::Option => f.write_str("{option}"),
            TargetSpec::OptionUpper => f.write_str("{OPTION}"),
        }
    }
}

/// A target after option-dependent strategies have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Name(String),
    Path(Vec<String>),
}

impl ResolvedTarget {
    /// Path elements of the target. A plain name is a one-element path.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            ResolvedTarget::Name(name) => vec![name.as_str()],
            ResolvedTarget::Path(path) => path.iter().map(String::as_str).collect(),
        }
    }
}

impl std::fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

/// Describes how one rule's value is coerced and where it is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Setting {
    pub target: TargetSpec,
    pub kind: SettingKind,
}

impl Setting {
    pub fn new(kind: SettingKind, target: impl Into<TargetSpec>) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }

    pub fn string(target: impl Into<TargetSpec>) -> Self {
        Self::new(SettingKind::String, target)
    }

    pub fn bool(target: impl Into<TargetSpec>) -> Self {
        Self::new(SettingKind::Bool, target)
    }

    pub fn int(target: impl Into<TargetSpec>) -> Self {
        Self::new(SettingKind::Int, target)
    }

    pub fn dict_item(target: impl Into<TargetSpec>) -> Self {
        Self::new(SettingKind::DictItem, target)
    }

    /// Resolve the name or path this setting writes to for an option.
    ///
    /// Fixed names and paths ignore `section` and `option`.
    pub fn resolve_target(&self, _section: &str, option: &str) -> ResolvedTarget {
        match &self.target {
            TargetSpec::Option => ResolvedTarget::Name(option.to_string()),
            TargetSpec::OptionUpper => ResolvedTarget::Name(option.to_uppercase()),
            TargetSpec::Name(name) => ResolvedTarget::Name(name.clone()),
            TargetSpec::Path(path) => ResolvedTarget::Path(path.clone()),
        }
    }

    /// Coerce `raw` and write it into `target`.
    pub fn apply<T: SettingsTarget + ?Sized>(
        &self,
        target: &mut T,
        section: &str,
        option: &str,
        raw: &str,
    ) -> Result<()> {
        let resolved = self.resolve_target(section, option);
        let value = self
            .kind
            .coerce(raw)
            .map_err(|source| Error::InvalidInteger {
                section: section.to_string(),
                option: option.to_string(),
                value: raw.to_string(),
                source,
            })?;

        if self.kind.is_nested() {
            let segments = resolved.segments();
            let [root, keys @ .., last] = segments.as_slice() else {
                return Err(Error::InvalidNestedPath {
                    section: section.to_string(),
                    option: option.to_string(),
                    path: segments.iter().map(|s| s.to_string()).collect(),
                });
            };
            set_nested(target, root, keys, last, value)?;
        } else {
            let name = resolved.to_string();
            if let Some(previous) = target.get_attr(&name) {
                tracing::trace!("Replacing {name} (was {previous})");
            }
            target.set_attr(&name, value);
        }

        tracing::debug!("Applied {section}.{option} -> {resolved} ({})", self.kind);
        Ok(())
    }
}

/// Write `value` at `root.keys...last`, creating intermediate mappings.
///
/// `root` must already exist on the target and hold a mapping.
fn set_nested<T: SettingsTarget + ?Sized>(
    target: &mut T,
    root: &str,
    keys: &[&str],
    last: &str,
    value: Value,
) -> Result<()> {
    let full_path = || {
        let mut path = vec![root];
        path.extend_from_slice(keys);
        path.push(last);
        path.join(".")
    };

    let mut mapping = target
        .attr_mut(root)
        .ok_or_else(|| Error::MissingNestedRoot {
            name: root.to_string(),
            path: full_path(),
        })?
        .as_object_mut()
        .ok_or_else(|| Error::NotAMapping {
            path: root.to_string(),
        })?;

    for (depth, key) in keys.iter().enumerate() {
        mapping = mapping
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| Error::NotAMapping {
                path: std::iter::once(root)
                    .chain(keys[..=depth].iter().copied())
                    .collect::<Vec<_>>()
                    .join("."),
            })?;
    }

    mapping.insert(last.to_string(), value);
    Ok(())
}
