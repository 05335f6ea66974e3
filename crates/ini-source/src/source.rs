//! Parsed INI documents
//!
//! Parsing is delegated to `rust-ini` with quote and escape processing
//! turned off, so values reach the loader exactly as written. On top of
//! the raw document this module applies the conventions settings files
//! expect: option names are folded to lower case, repeated sections are
//! merged, indented lines continue the previous value, and a `DEFAULT`
//! section (matched without regard to case) provides fallback values for
//! every other section. Keys before the first section header are an error.

use std::collections::BTreeMap;
use std::path::Path;

use ini::{Ini, ParseOption};

use crate::{Error, Result, io};

/// Section whose options are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// The narrow view of a configuration source that the loader depends on.
pub trait ConfigSource {
    /// Names of all sections, excluding [`DEFAULT_SECTION`].
    fn sections(&self) -> Vec<&str>;

    /// Option names within `section`. Empty if the section does not exist.
    fn options(&self, section: &str) -> Vec<&str>;

    /// Raw string value of `option` in `section`.
    fn get(&self, section: &str, option: &str) -> Option<&str>;
}

type Options = BTreeMap<String, String>;

/// An INI document split into sections and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSource {
    sections: BTreeMap<String, Options>,
    defaults: Options,
}

impl IniSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_origin(text, Path::new("<string>"))
    }

    /// Read and parse the INI file at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be read at all (missing, a
    /// directory, no permission, not UTF-8), so callers can treat it as
    /// "nothing to load". A file that is read but does not parse is an
    /// error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let text = match io::read_text(path) {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                tracing::debug!("INI file {} does not exist", path.display());
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable INI file: {e}");
                return Ok(None);
            }
        };
        Self::parse_with_origin(&text, path).map(Some)
    }

    /// Build a source from in-memory sections.
    ///
    /// Option names are folded to lower case exactly as they are when
    /// parsing. A section named [`DEFAULT_SECTION`] supplies defaults.
    pub fn from_sections<S, N, O, K, V>(sections: S) -> Self
    where
        S: IntoIterator<Item = (N, O)>,
        O: IntoIterator<Item = (K, V)>,
        N: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = Self::new();
        for (section, options) in sections {
            let options = options
                .into_iter()
                .map(|(option, value)| (option.into().to_lowercase(), value.into()))
                .collect();
            source.insert_section(section.into(), options);
        }
        source
    }

    fn parse_with_origin(text: &str, origin: &Path) -> Result<Self> {
        let mut options = ParseOption::default();
        options.enabled_quote = false;
        options.enabled_escape = false;
        options.enabled_indented_mutiline_value = true;
        let document =
            Ini::load_from_str_opt(text, options).map_err(|e| Error::parse(origin, e.to_string()))?;

        let mut source = Self::new();
        for (name, properties) in document.iter() {
            let Some(name) = name else {
                if let Some((key, _)) = properties.iter().next() {
                    return Err(Error::parse(
                        origin,
                        format!("key {key:?} appears before any section header"),
                    ));
                }
                continue;
            };

            let options = properties
                .iter()
                .map(|(option, raw)| (option.to_lowercase(), raw.to_string()))
                .collect();
            source.insert_section(name.to_string(), options);
        }

        Ok(source)
    }

    fn insert_section(&mut self, name: String, options: Options) {
        if name.eq_ignore_ascii_case(DEFAULT_SECTION) {
            self.defaults.extend(options);
        } else {
            self.sections.entry(name).or_default().extend(options);
        }
    }

    /// Options declared in the `DEFAULT` section.
    pub fn defaults(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// True if the document holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl ConfigSource for IniSource {
    fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    fn options(&self, section: &str) -> Vec<&str> {
        let Some(own) = self.sections.get(section) else {
            return Vec::new();
        };

        let mut options: Vec<&str> = own.keys().map(String::as_str).collect();
        options.extend(
            self.defaults
                .keys()
                .filter(|key| !own.contains_key(*key))
                .map(String::as_str),
        );
        options.sort_unstable();
        options
    }

    fn get(&self, section: &str, option: &str) -> Option<&str> {
        let own = self.sections.get(section)?;
        own.get(option)
            .or_else(|| self.defaults.get(option))
            .map(String::as_str)
    }
}
