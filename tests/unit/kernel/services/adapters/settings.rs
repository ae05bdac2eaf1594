use super::*;
use tempfile::tempdir;

#[test]
fn save_then_load_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    let mut settings = Settings::default();
    settings.editor.css_max_height = 640;
    settings.log_filter = Some("image_editor=debug".to_string());
    save_settings_to(&path, &settings).unwrap();

    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn missing_fields_use_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, r#"{ "editor": { "rotate_step_degrees": 90 } }"#).unwrap();

    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.editor.rotate_step_degrees, 90);
    assert_eq!(loaded.editor.css_max_width, 700);
    assert_eq!(loaded.editor.default_brush_color, "#000000");
    assert!(loaded.log_filter.is_none());
}

#[test]
fn invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io(_))
    ));
}
