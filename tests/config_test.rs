//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_guess::{GameConfiguration, GuessGame, StatusText};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
max_attempts = 10
warning_threshold = 4
min_number = 1
max_number = 1000
color_cycle_interval_ms = 250
"#,
    );

    let config = GameConfiguration::from_file(file.path()).unwrap();
    assert_eq!(*config.max_attempts(), 10);
    assert_eq!(*config.warning_threshold(), 4);
    assert_eq!(*config.max_number(), 1000);
    assert_eq!(*config.color_cycle_interval_ms(), 250);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = GameConfiguration::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfiguration::default());
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfiguration::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_values_abort() {
    let file = write_config("max_attempts = 3\nwarning_threshold = 5\n");
    let err = GameConfiguration::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("warning_threshold"));
}

#[test]
fn test_loaded_bounds_drive_validation() {
    let file = write_config("min_number = 10\nmax_number = 20\n");
    let config = GameConfiguration::from_file(file.path()).unwrap();
    let mut game = GuessGame::with_secret(config, 15).unwrap();

    let instruction = game.submit_guess("21");
    assert_eq!(instruction.status, StatusText::NumberTooHigh);
    assert_eq!(
        instruction.status.message(game.config()),
        "Enter a number no higher than 20"
    );
    assert_eq!(game.submit_guess("9").status, StatusText::NumberTooLow);
    assert_eq!(game.submit_guess("12").status, StatusText::TooLow);
}
