//! INI source reading for ini-settings
//!
//! Parses INI documents into sections and options and exposes them through
//! the narrow [`ConfigSource`] interface consumed by the loader.

pub mod error;
pub mod io;
pub mod source;

pub use error::{Error, Result};
pub use source::{ConfigSource, DEFAULT_SECTION, IniSource};
