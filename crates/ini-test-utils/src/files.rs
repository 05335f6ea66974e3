//! [`IniFixture`] builder for file-based test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding INI, rule and settings files.
///
/// # Example
///
/// ```rust,no_run
/// use ini_test_utils::IniFixture;
///
/// let fixture = IniFixture::new();
/// let ini = fixture.write_ini("app.ini", "[security]\ndebug = true\n");
/// assert!(ini.exists());
/// ```
pub struct IniFixture {
    temp_dir: TempDir,
}

impl Default for IniFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl IniFixture {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an INI file and return its path.
    pub fn write_ini(&self, name: &str, content: &str) -> PathBuf {
        self.write(name, content)
    }

    /// Write a TOML rule file and return its path.
    pub fn write_rules(&self, name: &str, content: &str) -> PathBuf {
        self.write(name, content)
    }

    /// Write a JSON settings seed and return its path.
    pub fn write_settings(&self, name: &str, value: &serde_json::Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| panic!("IniFixture: failed to serialize settings: {e}"));
        self.write(name, &content)
    }

    /// Path of a file in the fixture that was never written.
    pub fn missing(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        assert!(!path.exists(), "Expected file NOT to exist: {}", path.display());
        path
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("IniFixture: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("IniFixture: failed to write {}: {e}", path.display()));
        path
    }
}
