use std::fs;
use std::path::PathBuf;

use seabattle::settings::SETTINGS_FILE;
use seabattle::{Settings, DEFAULT_BOARD_SIZE};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabattle-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(SETTINGS_FILE)
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);
    assert_eq!(Settings::load(&path), Settings::default());
    assert_eq!(Settings::default().board_size, DEFAULT_BOARD_SIZE);
}

#[test]
fn test_save_then_load() {
    let path = temp_path("roundtrip");
    let mut settings = Settings::default();
    settings.set_board_size(12).unwrap();
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).board_size, 12);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"board_size\":12"));
}

#[test]
fn test_garbage_file_gives_defaults() {
    let path = temp_path("garbage");
    fs::write(&path, "not json at all").unwrap();
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn test_out_of_range_size_gives_defaults() {
    let path = temp_path("range");
    fs::write(&path, r#"{"board_size": 40}"#).unwrap();
    assert_eq!(Settings::load(&path).board_size, DEFAULT_BOARD_SIZE);
    fs::write(&path, r#"{"board_size": 6}"#).unwrap();
    assert_eq!(Settings::load(&path).board_size, 6);
}

#[test]
fn test_missing_key_uses_default() {
    let path = temp_path("nokey");
    fs::write(&path, "{}").unwrap();
    assert_eq!(Settings::load(&path).board_size, DEFAULT_BOARD_SIZE);
}

#[test]
fn test_set_board_size_bounds() {
    let mut settings = Settings::default();
    assert!(settings.set_board_size(5).is_err());
    assert!(settings.set_board_size(16).is_err());
    assert_eq!(settings.board_size, DEFAULT_BOARD_SIZE);
    settings.set_board_size(15).unwrap();
    assert_eq!(settings.board_size, 15);
}
