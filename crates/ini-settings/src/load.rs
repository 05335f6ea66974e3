//! Loading INI sources into settings
//!
//! Typical use at startup:
//!
//! ```no_run
//! use ini_settings::{Settings, load_ini};
//! use std::path::Path;
//!
//! let mut settings = Settings::new();
//! load_ini(Some(Path::new("/etc/application/application.ini")), Some(&mut settings), None)
//!     .expect("settings must load");
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ini_source::{ConfigSource, IniSource};

use crate::error::{Error, Result};
use crate::rules::{RuleTable, match_setting};
use crate::target::SettingsTarget;

/// Environment variable consulted when no INI path is given.
pub const CONFIG_FILE_ENV: &str = "INI_SETTINGS_FILE";

/// Apply every matching option of `source` to `target`.
///
/// Options without a rule are skipped. The first failing option aborts the
/// load; options applied before it stay applied.
pub fn load<S, T>(source: &S, target: &mut T, rules: &RuleTable) -> Result<()>
where
    S: ConfigSource + ?Sized,
    T: SettingsTarget + ?Sized,
{
    for section in source.sections() {
        for option in source.options(section) {
            let Some(setting) = match_setting(section, option, rules) else {
                tracing::trace!("No rule for {section}.{option}, skipping");
                continue;
            };
            let Some(raw) = source.get(section, option) else {
                continue;
            };
            setting.apply(&mut *target, section, option, raw)?;
        }
    }
    Ok(())
}

/// Load an INI file into `target`.
///
/// * `ini_file` - path to the file; falls back to [`CONFIG_FILE_ENV`]
/// * `target` - settings object to populate
/// * `rules` - rule table; defaults to [`RuleTable::defaults`]
///
/// A file that cannot be read (missing, a directory, unreadable, not UTF-8)
/// loads nothing. A file that is read but cannot be parsed is an error.
pub fn load_ini<T: SettingsTarget + ?Sized>(
    ini_file: Option<&Path>,
    target: Option<&mut T>,
    rules: Option<&RuleTable>,
) -> Result<()> {
    let rules = rules.unwrap_or(RuleTable::defaults());
    let path = resolve_ini_path(ini_file, std::env::var_os(CONFIG_FILE_ENV))?;
    let target = target.ok_or(Error::TargetMissing)?;

    match IniSource::read(&path)? {
        Some(source) => {
            tracing::debug!("Loading settings from {}", path.display());
            load(&source, target, rules)
        }
        None => {
            tracing::warn!("Settings file {} could not be read, nothing loaded", path.display());
            Ok(())
        }
    }
}

/// Pick the INI path: the explicit one, else a non-empty environment value.
pub fn resolve_ini_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(Error::ConfigurationMissing {
            env_var: CONFIG_FILE_ENV,
        }),
    }
}
