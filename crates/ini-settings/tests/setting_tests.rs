//! Tests for applying setting descriptors to settings objects

use ini_settings::{Error, Setting, Settings, SettingsTarget, TargetSpec};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

fn nested_settings() -> Settings {
    Settings::from_value(json!({
        "test1": {},
        "test2": {"a": "b"},
        "test3": {"c": {"d": "e"}},
        "test4": {"c": {"d": {"e": "f"}}}
    }))
    .unwrap()
}

#[test]
fn test_dict_item_set_value() {
    let mut settings = nested_settings();

    Setting::dict_item(["test1", "setting"])
        .apply(&mut settings, "application", "test1", "value1")
        .unwrap();
    Setting::dict_item(["test2", "a"])
        .apply(&mut settings, "application", "test2", "value2")
        .unwrap();
    Setting::dict_item(["test3", "c", "d"])
        .apply(&mut settings, "application", "test3", "value3")
        .unwrap();
    Setting::dict_item(["test4", "c", "d", "e"])
        .apply(&mut settings, "application", "test4", "value4")
        .unwrap();

    assert_eq!(settings.get_path(&["test1", "setting"]), Some(&json!("value1")));
    assert_eq!(settings.get_path(&["test2", "a"]), Some(&json!("value2")));
    assert_eq!(settings.get_path(&["test3", "c", "d"]), Some(&json!("value3")));
    assert_eq!(
        settings.get_path(&["test4", "c", "d", "e"]),
        Some(&json!("value4"))
    );
}

#[test]
fn test_dict_item_creates_intermediate_mappings() {
    let mut settings = Settings::from_value(json!({"CACHES": {}})).unwrap();

    Setting::dict_item(["CACHES", "default", "OPTIONS", "TIMEOUT"])
        .apply(&mut settings, "cache", "timeout", "30")
        .unwrap();

    assert_eq!(
        settings.get("CACHES"),
        Some(&json!({"default": {"OPTIONS": {"TIMEOUT": "30"}}}))
    );
}

#[test]
fn test_dict_item_keeps_sibling_keys() {
    let mut settings = Settings::from_value(json!({
        "DATABASES": {"default": {"USER": "root", "PASSWORD": "password"}}
    }))
    .unwrap();

    Setting::dict_item(["DATABASES", "default", "USER"])
        .apply(&mut settings, "database", "user", "postgres")
        .unwrap();

    assert_eq!(
        settings.get("DATABASES"),
        Some(&json!({"default": {"USER": "postgres", "PASSWORD": "password"}}))
    );
}

#[test]
fn test_dict_item_missing_root_is_error() {
    let mut settings = Settings::new();

    let err = Setting::dict_item(["DATABASES", "default", "USER"])
        .apply(&mut settings, "database", "user", "postgres")
        .unwrap_err();

    match err {
        Error::MissingNestedRoot { name, path } => {
            assert_eq!(name, "DATABASES");
            assert_eq!(path, "DATABASES.default.USER");
        }
        other => panic!("expected MissingNestedRoot, got {other:?}"),
    }
    assert!(!settings.contains("DATABASES"));
}

#[test]
fn test_dict_item_root_not_a_mapping() {
    let mut settings = Settings::from_value(json!({"DATABASES": "sqlite"})).unwrap();

    let err = Setting::dict_item(["DATABASES", "default"])
        .apply(&mut settings, "database", "default", "x")
        .unwrap_err();

    assert!(matches!(err, Error::NotAMapping { path } if path == "DATABASES"));
}

#[test]
fn test_dict_item_intermediate_not_a_mapping() {
    let mut settings = Settings::from_value(json!({"test2": {"a": "b"}})).unwrap();

    let err = Setting::dict_item(["test2", "a", "c"])
        .apply(&mut settings, "application", "x", "v")
        .unwrap_err();

    assert!(matches!(err, Error::NotAMapping { path } if path == "test2.a"));
    assert_eq!(settings.get("test2"), Some(&json!({"a": "b"})));
}

#[test]
fn test_typed_values() {
    let mut settings = Settings::new();

    Setting::bool("DEBUG")
        .apply(&mut settings, "security", "debug", "True")
        .unwrap();
    Setting::int(TargetSpec::OptionUpper)
        .apply(&mut settings, "int", "test", "13")
        .unwrap();

    assert_eq!(settings.get("DEBUG"), Some(&Value::Bool(true)));
    assert_eq!(settings.get("TEST"), Some(&json!(13)));
}

#[test]
fn test_plain_map_is_a_target() {
    let mut attrs: Map<String, Value> = Map::new();
    attrs.insert("DATABASES".into(), json!({"default": {}}));

    Setting::string("SECRET_KEY")
        .apply(&mut attrs, "security", "secret_key", "abc")
        .unwrap();
    Setting::dict_item(["DATABASES", "default", "HOST"])
        .apply(&mut attrs, "database", "host", "db.local")
        .unwrap();

    assert_eq!(attrs.get_attr("SECRET_KEY"), Some(&json!("abc")));
    assert_eq!(attrs["DATABASES"]["default"]["HOST"], json!("db.local"));
}

#[test]
fn test_dyn_target() {
    let mut settings = Settings::new();
    let target: &mut dyn SettingsTarget = &mut settings;

    Setting::string(TargetSpec::Option)
        .apply(target, "string", "name", "value")
        .unwrap();

    assert_eq!(settings.get_str("name"), Some("value"));
}
