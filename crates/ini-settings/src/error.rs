//! Error types for ini-settings

use std::path::PathBuf;

/// Result type for ini-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither an explicit INI path nor the environment fallback was given
    #[error("No ini file provided and {env_var} is not set, can't load settings")]
    ConfigurationMissing { env_var: &'static str },

    /// No settings object was supplied to load into
    #[error("No settings target provided, can't load settings")]
    TargetMissing,

    /// Integer coercion failed
    #[error("Invalid integer value for {section}.{option}: {value:?}")]
    InvalidInteger {
        section: String,
        option: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A nested-mapping rule points at an attribute the target does not have
    #[error("Settings have no attribute {name} to hold {path}")]
    MissingNestedRoot { name: String, path: String },

    /// A value along a nested-mapping path is not a mapping
    #[error("Setting {path} is not a mapping")]
    NotAMapping { path: String },

    /// A nested-mapping rule resolved to fewer than two path elements
    #[error("Nested setting path for {section}.{option} needs at least two elements, got {path:?}")]
    InvalidNestedPath {
        section: String,
        option: String,
        path: Vec<String>,
    },

    /// Invalid rule definition file
    #[error("Invalid rule file at {path}: {message}")]
    RuleFile { path: PathBuf, message: String },

    /// Unknown setting kind name
    #[error("Unknown setting kind: {kind}")]
    UnknownKind { kind: String },

    // Transparent wrappers for underlying crate errors
    /// Error reading or parsing the INI source
    #[error(transparent)]
    Source(#[from] ini_source::Error),
}
