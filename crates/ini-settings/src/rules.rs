//! Rule table and matching
//!
//! A [`RuleTable`] maps `(section, option)` keys to [`Setting`]s. The option
//! part of a key is either an exact option name or [`OptionMatch::Any`],
//! which matches every option of the section that has no exact rule.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::coerce::SettingKind;
use crate::setting::{Setting, TargetSpec};

/// The option half of a rule key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionMatch {
    Exact(String),
    /// Any option without an exact rule in the same section
    Any,
}

impl fmt::Display for OptionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionMatch::Exact(option) => f.write_str(option),
            OptionMatch::Any => f.write_str("*"),
        }
    }
}

/// Key of a rule table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    pub section: String,
    pub option: OptionMatch,
}

impl RuleKey {
    pub fn exact(section: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            option: OptionMatch::Exact(option.into()),
        }
    }

    pub fn any(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            option: OptionMatch::Any,
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.section, self.option)
    }
}

static DEFAULT_RULES: LazyLock<RuleTable> = LazyLock::new(RuleTable::with_builtins);

/// Mapping from rule keys to setting descriptors.
///
/// # Example
///
/// ```
/// use ini_settings::{RuleTable, Setting, TargetSpec};
///
/// let rules = RuleTable::new()
///     .exact("application", "max_file_size", Setting::int("MAX_FILE_SIZE"))
///     .any("application", Setting::string(TargetSpec::OptionUpper));
///
/// assert_eq!(
///     rules.lookup("application", "max_file_size"),
///     Some(&Setting::int("MAX_FILE_SIZE"))
/// );
/// assert_eq!(
///     rules.lookup("application", "other"),
///     Some(&Setting::string(TargetSpec::OptionUpper))
/// );
/// assert_eq!(rules.lookup("urls", "media_url"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: HashMap<RuleKey, Setting>,
}

impl RuleTable {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rule table, shared for the whole process.
    pub fn defaults() -> &'static RuleTable {
        &DEFAULT_RULES
    }

    /// Build a fresh copy of the built-in rules.
    ///
    /// Covers the database connection fields (written into
    /// `DATABASES["default"]`), the secret key, the debug flag, the media
    /// and static URLs, and one wildcard section per setting kind whose
    /// options are written under their upper-cased names.
    ///
    /// The `[dict_item]` wildcard resolves to a single name, which is not a
    /// nested path. Any option in a `[dict_item]` section therefore fails
    /// with [`Error::InvalidNestedPath`](crate::Error::InvalidNestedPath)
    /// and aborts the load. Write nested options through an exact rule with
    /// a path target instead.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();

        for (option, key) in [
            ("user", "USER"),
            ("password", "PASSWORD"),
            ("engine", "ENGINE"),
            ("name", "NAME"),
            ("host", "HOST"),
            ("port", "PORT"),
        ] {
            table.insert(
                RuleKey::exact("database", option),
                Setting::dict_item(["DATABASES", "default", key]),
            );
        }

        table.insert(
            RuleKey::exact("security", "secret_key"),
            Setting::string("SECRET_KEY"),
        );
        table.insert(RuleKey::exact("security", "debug"), Setting::bool("DEBUG"));
        table.insert(
            RuleKey::exact("urls", "media_url"),
            Setting::string("MEDIA_URL"),
        );
        table.insert(
            RuleKey::exact("urls", "static_url"),
            Setting::string("STATIC_URL"),
        );

        for kind in SettingKind::ALL {
            table.insert(
                RuleKey::any(kind.as_str()),
                Setting::new(kind, TargetSpec::OptionUpper),
            );
        }

        table
    }

    /// Insert a rule, returning the descriptor it replaced.
    pub fn insert(&mut self, key: RuleKey, setting: Setting) -> Option<Setting> {
        self.rules.insert(key, setting)
    }

    /// Builder form of [`insert`](Self::insert) for an exact option.
    pub fn exact(
        mut self,
        section: impl Into<String>,
        option: impl Into<String>,
        setting: Setting,
    ) -> Self {
        self.insert(RuleKey::exact(section, option), setting);
        self
    }

    /// Builder form of [`insert`](Self::insert) for a section wildcard.
    pub fn any(mut self, section: impl Into<String>, setting: Setting) -> Self {
        self.insert(RuleKey::any(section), setting);
        self
    }

    /// Get the descriptor stored under exactly `key`.
    pub fn get(&self, key: &RuleKey) -> Option<&Setting> {
        self.rules.get(key)
    }

    /// Find the descriptor for an option. See [`match_setting`].
    pub fn lookup(&self, section: &str, option: &str) -> Option<&Setting> {
        match_setting(section, option, self)
    }

    /// Add all rules of `other`, replacing rules with the same key.
    pub fn merge(&mut self, other: RuleTable) {
        self.rules.extend(other.rules);
    }

    /// Rules sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &Setting)> {
        let mut entries: Vec<_> = self.rules.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Extend<(RuleKey, Setting)> for RuleTable {
    fn extend<I: IntoIterator<Item = (RuleKey, Setting)>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl FromIterator<(RuleKey, Setting)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (RuleKey, Setting)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Find the setting for `(section, option)`.
///
/// An exact rule for the option always wins. Otherwise the section's
/// wildcard rule applies, if there is one. There is no fallback across
/// sections.
pub fn match_setting<'a>(section: &str, option: &str, rules: &'a RuleTable) -> Option<&'a Setting> {
    rules
        .get(&RuleKey::exact(section, option))
        .or_else(|| rules.get(&RuleKey::any(section)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_builtins() {
        let rules = RuleTable::defaults();
        assert_eq!(rules.len(), 14);
        assert_eq!(
            rules.lookup("database", "user"),
            Some(&Setting::dict_item(["DATABASES", "default", "USER"]))
        );
        assert_eq!(rules.lookup("security", "debug"), Some(&Setting::bool("DEBUG")));
        assert_eq!(
            rules.lookup("int", "anything"),
            Some(&Setting::int(TargetSpec::OptionUpper))
        );
    }

    #[test]
    fn test_defaults_are_shared() {
        assert!(std::ptr::eq(RuleTable::defaults(), RuleTable::defaults()));
    }

    #[test]
    fn test_insert_replaces() {
        let mut rules = RuleTable::new();
        assert!(rules.insert(RuleKey::any("a"), Setting::string("X")).is_none());
        let previous = rules.insert(RuleKey::any("a"), Setting::int("Y"));
        assert_eq!(previous, Some(Setting::string("X")));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_wildcard_does_not_cross_sections() {
        let rules = RuleTable::new().any("string", Setting::string(TargetSpec::OptionUpper));
        assert!(rules.lookup("bool", "x").is_none());
    }

    #[test]
    fn test_wildcard_literal_is_not_any() {
        let rules = RuleTable::new().exact("a", "*", Setting::string("STAR"));
        assert!(rules.lookup("a", "other").is_none());
        assert_eq!(rules.lookup("a", "*"), Some(&Setting::string("STAR")));
    }

    #[test]
    fn test_merge_later_wins() {
        let mut rules = RuleTable::new().exact("a", "b", Setting::string("OLD"));
        rules.merge(RuleTable::new().exact("a", "b", Setting::string("NEW")));
        assert_eq!(rules.lookup("a", "b"), Some(&Setting::string("NEW")));
    }

    #[test]
    fn test_iter_sorted_with_exact_before_any() {
        let rules = RuleTable::new()
            .any("b", Setting::string("B"))
            .exact("b", "x", Setting::string("BX"))
            .exact("a", "y", Setting::string("AY"));

        let keys: Vec<String> = rules.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["[a] y", "[b] x", "[b] *"]);
    }
}
