//! Settings seeds and shared fixture paths.

use serde_json::{Value, json};
use std::path::PathBuf;

/// Settings object with a `DATABASES["default"]` connection mapping, as a
/// web application's settings module would declare it before loading INI
/// overrides.
pub fn database_settings() -> Value {
    json!({
        "DATABASES": {
            "default": {
                "ENGINE": "django.contrib.gis.db.backends.postgis",
                "NAME": "cas",
                "USER": "root",
                "PASSWORD": "password",
                "HOST": "",
                "PORT": ""
            }
        }
    })
}

/// Path to the workspace `test-fixtures/` directory.
pub fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/ini-test-utils -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

/// Path to a file under `test-fixtures/ini/`.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn ini_fixture(name: &str) -> PathBuf {
    let path = fixtures_dir().join("ini").join(name);
    assert!(path.exists(), "Missing fixture: {}", path.display());
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_settings_shape() {
        let settings = database_settings();
        assert_eq!(settings["DATABASES"]["default"]["USER"], "root");
    }

    #[test]
    fn test_ini_fixture_exists() {
        assert!(ini_fixture("application.ini").is_file());
    }
}
