use std::fs;

use clinidash::config::Config;
use clinidash::icons::IconTheme;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("clinidash.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_section, "today");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 30);
    assert_eq!(config.ui.patient_panel_width, 34);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.date_format, "%Y-%m-%d");
    assert_eq!(config.tasks.upcoming_window_days, 7);
    assert_eq!(config.data.fixture_path, None);
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[ui]
default_section = "project-emily-chen"
icon_theme = "emoji"

[tasks]
upcoming_window_days = 14
"#,
    );

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.default_section, "project-emily-chen");
    assert_eq!(config.ui.icon_theme, IconTheme::Emoji);
    assert_eq!(config.ui.sidebar_width, 30);
    assert_eq!(config.upcoming_window(), chrono::Duration::days(14));
    assert!(config.display.show_notes);
}

#[test]
fn test_unknown_default_section_is_accepted() {
    let mut config = Config::default();
    config.ui.default_section = "somewhere-else".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let mut config = Config::default();
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.patient_panel_width = 90;
    assert!(config.validate().is_err());

    for days in [0, 32] {
        let mut config = Config::default();
        config.tasks.upcoming_window_days = days;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("upcoming_window_days"), "{}", err);
    }
}

#[test]
fn test_validation_of_formats_and_levels() {
    let mut config = Config::default();
    config.display.date_format = "%d/%m/%Y".to_string();
    assert!(config.validate().is_ok());

    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui\nsidebar_width = ");
    let err = format!("{:#}", Config::load_from_file(&path).unwrap_err());
    assert!(err.contains("Failed to parse config file"), "{}", err);
}

#[test]
fn test_generated_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Clinidash Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.default_section, "today");
    assert_eq!(config.tasks.upcoming_window_days, 7);
}
