// Config file persistence tests

use overlaykit_core::StrokeStyle;
use overlaykit_settings::{Config, SettingsError};
use tempfile::TempDir;

fn customized() -> Config {
    let mut config = Config::default();
    config.styles.color = "#123abc".to_string();
    config.styles.thickness = 3.0;
    config.styles.stroke_style = StrokeStyle::Dashed;
    config.selection.excluded_templates.push("straightLine".to_string());
    config.catalog.register_builtins = false;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_config_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.styles.color = String::new();
    assert!(matches!(
        config.save_to_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"selection": {"min_thickness": 0}}"#).unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    assert!(matches!(
        Config::default().save_to_file(&path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}
