//! Rule tables declared in TOML
//!
//! ```toml
//! extends_defaults = false
//!
//! [[rule]]
//! section = "application"
//! option = "max_file_size"
//! kind = "int"
//! target = { name = "MAX_FILE_SIZE" }
//!
//! [[rule]]
//! section = "application"   # no option: matches any option
//! kind = "string"
//! target = "option-upper"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coerce::SettingKind;
use crate::error::{Error, Result};
use crate::rules::{OptionMatch, RuleKey, RuleTable};
use crate::setting::{Setting, TargetSpec};

/// One `[[rule]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub section: String,
    /// Option name; omitted for a section wildcard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    pub kind: SettingKind,
    pub target: TargetSpec,
}

impl RuleDefinition {
    fn key(&self) -> RuleKey {
        match &self.option {
            Some(option) => RuleKey::exact(&self.section, option),
            None => RuleKey::any(&self.section),
        }
    }
}

impl From<(&RuleKey, &Setting)> for RuleDefinition {
    fn from((key, setting): (&RuleKey, &Setting)) -> Self {
        Self {
            section: key.section.clone(),
            option: match &key.option {
                OptionMatch::Exact(option) => Some(option.clone()),
                OptionMatch::Any => None,
            },
            kind: setting.kind,
            target: setting.target.clone(),
        }
    }
}

/// A TOML rule file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    /// Start from the built-in rules before adding these
    #[serde(default)]
    pub extends_defaults: bool,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDefinition>,
}

impl RuleFile {
    /// Parse a rule file from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_origin(text, Path::new("<string>"))
    }

    /// Read a rule file and build its rule table.
    pub fn load(path: &Path) -> Result<RuleTable> {
        let text = ini_source::io::read_text(path)?;
        let file = Self::parse_with_origin(&text, path)?;
        tracing::debug!("Loaded {} rules from {}", file.rules.len(), path.display());
        file.validate(path)?;
        Ok(file.into_table())
    }

    /// Describe an existing table as a rule file.
    pub fn from_table(table: &RuleTable) -> Self {
        Self {
            extends_defaults: false,
            rules: table.iter().map(RuleDefinition::from).collect(),
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::RuleFile {
            path: "<string>".into(),
            message: e.to_string(),
        })
    }

    /// Build the rule table. Later entries replace earlier ones with the
    /// same key.
    pub fn into_table(self) -> RuleTable {
        let mut table = if self.extends_defaults {
            RuleTable::defaults().clone()
        } else {
            RuleTable::new()
        };
        table.extend(self.rules.into_iter().map(|rule| {
            let key = rule.key();
            (key, Setting::new(rule.kind, rule.target))
        }));
        table
    }

    fn parse_with_origin(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::RuleFile {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reject nested rules whose fixed path could never be applied.
    fn validate(&self, origin: &Path) -> Result<()> {
        for rule in &self.rules {
            let short_path = match &rule.target {
                TargetSpec::Path(path) => path.len() < 2,
                TargetSpec::Name(_) => true,
                TargetSpec::Option | TargetSpec::OptionUpper => false,
            };
            if rule.kind.is_nested() && short_path {
                return Err(Error::RuleFile {
                    path: origin.to_path_buf(),
                    message: format!(
                        "rule {} needs a target path of at least two elements",
                        rule.key()
                    ),
                });
            }
        }
        Ok(())
    }
}
