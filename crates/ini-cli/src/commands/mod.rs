//! Command implementations for ini-cli

pub mod load;
pub mod rules;

use std::borrow::Cow;
use std::path::Path;

use ini_settings::{RuleFile, RuleTable};

use crate::error::Result;

pub use load::run_load;
pub use rules::{run_match, run_rules};

/// The rule table from `path`, or the built-in rules.
pub(crate) fn rule_table(path: Option<&Path>) -> Result<Cow<'static, RuleTable>> {
    match path {
        Some(path) => Ok(Cow::Owned(RuleFile::load(path)?)),
        None => Ok(Cow::Borrowed(RuleTable::defaults())),
    }
}
