//! Integration tests for configuration resolution and fallback behavior.

use eos_config::config::{
    AppConfig, BaseConfig, ConfigFile, ConfigLoader, LoadOptions, CONFIG_FILE_NAME,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds an AppConfig against a temp directory with the output directory
/// overridden, the way test consumers construct their configuration.
fn tmp_config(working_dir: &Path) -> AppConfig {
    let loader = ConfigLoader::bundled();
    let mut config = loader.load(working_dir).unwrap();
    config.directories.output = working_dir.display().to_string();
    config
}

#[test]
fn test_empty_directory_without_copy_equals_bundled_default() {
    let temp_dir = TempDir::new().unwrap();

    let loader = ConfigLoader::bundled();
    let config = loader
        .load_with(
            temp_dir.path(),
            LoadOptions {
                copy_default: false,
                update_outdated: true,
            },
        )
        .unwrap();

    let expected: BaseConfig =
        serde_json::from_str(loader.default_config().text()).unwrap();
    assert_eq!(config.directories, expected.directories);
    assert_eq!(config.eos, expected.eos);

    // read-only fallback: nothing written to the working directory
    assert!(!temp_dir.path().join(CONFIG_FILE_NAME).exists());
}

#[test]
fn test_copy_default_materializes_user_file() {
    let temp_dir = TempDir::new().unwrap();

    let loader = ConfigLoader::bundled();
    let config = loader
        .load_with(
            temp_dir.path(),
            LoadOptions {
                copy_default: true,
                update_outdated: true,
            },
        )
        .unwrap();

    let user_file = temp_dir.path().join(CONFIG_FILE_NAME);
    assert!(user_file.exists());

    // the fresh copy is already up to date
    assert!(!loader
        .apply_update(&ConfigFile::User(user_file), true)
        .unwrap());

    let expected: BaseConfig =
        serde_json::from_str(loader.default_config().text()).unwrap();
    assert_eq!(config.eos, expected.eos);
}

#[test]
fn test_working_dir_is_resolved_absolute() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::bundled().load(temp_dir.path()).unwrap();
    assert!(config.working_dir.is_absolute());
    assert_eq!(config.output_dir(), config.working_dir.join("output"));
    assert_eq!(config.cache_dir(), config.working_dir.join("cache"));
}

#[test]
fn test_invalid_config_error_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let user_file = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &user_file,
        r#"{"directories": {"output": "output", "cache": "cache"}, "eos": "not an object"}"#,
    )
    .unwrap();

    // leave the file as-is so validation sees the broken document
    let result = ConfigLoader::bundled().load_with(
        temp_dir.path(),
        LoadOptions {
            copy_default: false,
            update_outdated: false,
        },
    );

    let message = result.unwrap_err().to_string();
    assert!(message.contains(&user_file.display().to_string()));
    assert!(message.contains("not valid"));
}

#[test]
fn test_tmp_config_fixture_overrides_output() {
    let temp_dir = TempDir::new().unwrap();

    let config = tmp_config(temp_dir.path());
    assert_eq!(
        config.directories.output,
        temp_dir.path().display().to_string()
    );
    assert_eq!(config.directories.cache, "cache");
}

#[test]
fn test_custom_default_document_is_authoritative() {
    let temp_dir = TempDir::new().unwrap();
    let default_path = temp_dir.path().join("custom.default.json");
    fs::write(
        &default_path,
        r#"{
  "directories": {"output": "results", "cache": "tmp"},
  "eos": {
    "prediction_hours": 24,
    "optimization_hours": 12,
    "penalty": 5,
    "available_charging_rates_in_percentage": [0.0, 100.0]
  }
}"#,
    )
    .unwrap();

    let default = eos_config::config::DefaultConfig::from_path(&default_path).unwrap();
    let working_dir = temp_dir.path().join("ws");
    fs::create_dir_all(&working_dir).unwrap();

    let config = ConfigLoader::new(default).load(&working_dir).unwrap();
    assert_eq!(config.directories.output, "results");
    assert_eq!(config.eos.prediction_hours, 24);
}
