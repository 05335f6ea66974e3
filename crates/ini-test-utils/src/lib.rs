//! Shared test utilities for the ini-settings workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`files`]: [`IniFixture`] builder for INI, rule and seed files on disk
//! - [`settings`]: pre-populated settings objects and the shared fixture directory

pub mod files;
pub mod settings;

pub use files::IniFixture;
pub use settings::{database_settings, fixtures_dir, ini_fixture};
