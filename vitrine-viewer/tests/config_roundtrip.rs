//! Configuration file round trips and fallback behavior.

use tempfile::tempdir;
use vitrine_viewer::config::Config;

#[test]
fn config_round_trips_through_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.images = vec![
        "https://example.com/one.jpg".to_string(),
        "https://example.com/two.jpg".to_string(),
    ];
    config.period_ms = 4500;
    config.pulse = false;

    config.save_to(&path).expect("save creates parents and writes");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.images, config.images);
    assert_eq!(loaded.period_ms, 4500);
    assert!(!loaded.pulse);
    assert_eq!(loaded.window_width, config.window_width);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let loaded = Config::load_from(&dir.path().join("absent.json"));

    assert!(loaded.images.is_empty());
    assert_eq!(loaded.period_ms, 3000);
    assert!(loaded.pulse);
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.period_ms, 3000);
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"images": ["https://example.com/a.jpg"]}"#)
        .expect("write");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.images.len(), 1);
    assert_eq!(loaded.period_ms, 3000);
    assert!(loaded.pulse);
}
