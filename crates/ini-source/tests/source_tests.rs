//! Integration tests for reading INI files from disk

use ini_source::{ConfigSource, Error, IniSource};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/ini-source -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

#[test]
fn test_read_fixture() {
    let source = IniSource::read(&fixtures_dir().join("ini/application.ini"))
        .unwrap()
        .expect("fixture should exist");

    assert_eq!(
        source.sections(),
        vec!["application", "bool", "database", "int", "security", "string"]
    );
    assert_eq!(source.options("bool"), vec!["abool", "bbool", "cbool", "dbool"]);
    assert_eq!(source.get("security", "secret_key"), Some("krhnfgjn34rfm3iof4!JIKMK"));
    assert_eq!(source.get("string", "a_string"), Some("a value"));
    assert_eq!(source.get("int", "test"), Some("13"));
}

#[test]
fn test_read_missing_file_returns_none() {
    let temp = TempDir::new().unwrap();
    let source = IniSource::read(&temp.path().join("absent.ini")).unwrap();
    assert!(source.is_none());
}

#[test]
fn test_read_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.ini");
    fs::write(&path, "").unwrap();

    let source = IniSource::read(&path).unwrap().unwrap();
    assert!(source.is_empty());
}

#[test]
fn test_read_directory_returns_none() {
    let temp = TempDir::new().unwrap();
    assert!(IniSource::read(temp.path()).unwrap().is_none());
}

#[test]
fn test_read_invalid_utf8_returns_none() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.ini");
    fs::write(&path, b"[security]\nsecret_key = caf\xe9\n").unwrap();

    assert!(IniSource::read(&path).unwrap().is_none());
}

#[test]
fn test_read_keeps_backslashes_and_merges_sections() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.ini");
    fs::write(
        &path,
        "[security]\nsecret_key = ab\\cd\n\n[string]\na = 1\n\n[string]\nb = 2\n",
    )
    .unwrap();

    let source = IniSource::read(&path).unwrap().unwrap();
    assert_eq!(source.get("security", "secret_key"), Some("ab\\cd"));
    assert_eq!(source.options("string"), vec!["a", "b"]);
}

#[test]
fn test_key_before_section_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stray.ini");
    fs::write(&path, "stray = 1\n[a]\nb = c\n").unwrap();

    let err = IniSource::read(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}

#[test]
fn test_malformed_section_header_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.ini");
    fs::write(&path, "[database\nuser = postgres\n").unwrap();

    let err = IniSource::read(&path).unwrap_err();
    match err {
        Error::ConfigParse { path: reported, format, .. } => {
            assert_eq!(reported, path);
            assert_eq!(format, "INI");
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[rstest]
#[case("[s]\nkey = value\n", "value")]
#[case("[s]\nkey=value\n", "value")]
#[case("[s]\nkey =   spaced out  \n", "spaced out")]
#[case("[s]\nKEY = upper\n", "upper")]
#[case("[s]\nkey: colon\n", "colon")]
#[case("[s]\nkey = C:\\temp\\x\n", "C:\\temp\\x")]
#[case("[s]\nkey = 'single'\n", "'single'")]
fn test_value_parsing(#[case] text: &str, #[case] expected: &str) {
    let source = IniSource::parse(text).unwrap();
    assert_eq!(source.get("s", "key"), Some(expected));
}

#[test]
fn test_default_section_from_file() {
    let source = IniSource::parse("[DEFAULT]\nhost = localhost\n\n[database]\nuser = postgres\n")
        .unwrap();

    assert_eq!(source.sections(), vec!["database"]);
    assert_eq!(source.options("database"), vec!["host", "user"]);
    assert_eq!(source.get("database", "host"), Some("localhost"));
    assert_eq!(source.defaults().len(), 1);
}
