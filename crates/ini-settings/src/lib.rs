//! Rule-driven loading of INI files into application settings.
//!
//! Each `(section, option)` of an INI file is matched against a
//! [`RuleTable`]. The matching [`Setting`] coerces the raw text to a string,
//! boolean or integer and writes it into a [`SettingsTarget`], either as a
//! plain attribute or into a nested mapping such as
//! `DATABASES["default"]["USER"]`.

pub mod coerce;
pub mod error;
pub mod load;
pub mod rule_file;
pub mod rules;
pub mod setting;
pub mod target;

pub use coerce::{SettingKind, coerce};
pub use error::{Error, Result};
pub use ini_source::{ConfigSource, IniSource};
pub use load::{CONFIG_FILE_ENV, load, load_ini, resolve_ini_path};
pub use rule_file::{RuleDefinition, RuleFile};
pub use rules::{OptionMatch, RuleKey, RuleTable, match_setting};
pub use setting::{ResolvedTarget, Setting, TargetSpec};
pub use target::{Settings, SettingsTarget};
