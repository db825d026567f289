// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use llm_checker::config::Settings;
use llm_checker::scoring::UseCase;
use tempfile::TempDir;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();
    assert_eq!(settings.default_use_case, "general");
    assert_eq!(settings.use_case(), UseCase::General);
    assert_eq!(settings.limit, 5);
    assert_eq!(settings.probe_timeout_secs, 5);
    assert!(settings.catalogue_path.is_none());
}

#[test]
fn test_settings_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"default_use_case": "coding"}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.use_case(), UseCase::Coding);
    assert_eq!(settings.limit, 5);
}

#[test]
fn test_settings_catalogue_path_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    let catalogue = temp_dir.path().join("models.toml");
    let content = serde_json::json!({ "limit": 10, "catalogue_path": catalogue });
    std::fs::write(&path, content.to_string()).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.limit, 10);
    assert_eq!(loaded.catalogue_path, Some(catalogue));
}

#[test]
fn test_settings_invalid_limit_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"limit": 0}"#).unwrap();
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_settings_wrong_type_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"limit": "five"}"#).unwrap();
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_settings_json_uses_snake_case_keys() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert!(json.get("default_use_case").is_some());
    assert!(json.get("probe_timeout_secs").is_some());
    assert!(json.get("catalogue_path").is_none());
}
