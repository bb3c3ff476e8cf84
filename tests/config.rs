//! Configuration tests
//!
//! Tests for config paths and toolbar settings loading/saving.

use std::time::Duration;

use format_toolbar::config_paths;
use format_toolbar::{Point, Rect, TextField, TextInput, ToolbarConfig, ToolbarSettings};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("format-toolbar"));
        assert!(path_str.ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_default_settings() {
    let settings = ToolbarSettings::default();
    assert_eq!(settings.hide_delay_ms, 500);
    assert!(settings.prevent_close_on_click);
    assert_eq!(settings.position_gap, 5.0);
    assert_eq!(settings.z_index, 1000);
    assert_eq!(settings.hide_delay(), Duration::from_millis(500));
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let settings = ToolbarSettings::from_yaml("hide_delay_ms: 120\n").unwrap();
    assert_eq!(settings.hide_delay_ms, 120);
    assert!(settings.prevent_close_on_click);
    assert_eq!(settings.z_index, 1000);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(ToolbarSettings::from_yaml("").unwrap(), ToolbarSettings::default());
    assert_eq!(ToolbarSettings::from_yaml("  \n").unwrap(), ToolbarSettings::default());
}

#[test]
fn test_invalid_yaml_is_error() {
    assert!(ToolbarSettings::from_yaml("hide_delay_ms: soon").is_err());
}

#[test]
fn test_settings_serialize_deserialize() {
    let settings = ToolbarSettings {
        hide_delay_ms: 50,
        prevent_close_on_click: false,
        position_gap: 8.0,
        z_index: 7,
    };
    let yaml = serde_yaml::to_string(&settings).unwrap();
    let parsed: ToolbarSettings = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_save_then_load_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.yaml");
    let settings = ToolbarSettings {
        hide_delay_ms: 0,
        ..ToolbarSettings::default()
    };

    settings.save_to(&path).unwrap();
    let loaded = ToolbarSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_from_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.yaml");
    let err = ToolbarSettings::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.yaml"));
}

// ========================================================================
// Toolbar Config Tests
// ========================================================================

#[test]
fn test_default_position_below_left_edge() {
    let input = TextField::new("x").with_rect(Rect::new(100.0, 200.0, 50.0, 20.0));
    let config = ToolbarConfig::default();
    assert_eq!(config.position_for(&input), Point::new(100.0, 225.0));
}

#[test]
fn test_position_gap_from_settings() {
    let input = TextField::new("x").with_rect(Rect::new(0.0, 0.0, 50.0, 20.0));
    let config = ToolbarConfig::new(ToolbarSettings {
        position_gap: 12.0,
        ..ToolbarSettings::default()
    });
    assert_eq!(config.position_for(&input), Point::new(0.0, 32.0));
}

#[test]
fn test_custom_position_overrides_gap() {
    let input = TextField::new("x").with_rect(Rect::new(10.0, 10.0, 50.0, 20.0));
    let config = ToolbarConfig::default().with_position(|input: &dyn TextInput| {
        let rect = input.bounding_rect();
        Point::new(rect.right() + 4.0, rect.top())
    });
    assert_eq!(config.position_for(&input), Point::new(64.0, 10.0));
}

#[test]
fn test_builders_update_settings() {
    let config = ToolbarConfig::default()
        .with_hide_delay(Duration::from_millis(75))
        .with_prevent_close_on_click(false);
    assert_eq!(config.hide_delay(), Duration::from_millis(75));
    assert!(!config.prevent_close_on_click());
}
