//! Tests for game configuration loading.

use noughts::GameConfig;
use noughts_core::{DEFAULT_DEPTH, Player};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_without_file() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(*config.engine(), Player::O);
    assert_eq!(*config.depth(), DEFAULT_DEPTH);
}

#[test]
fn test_file_overrides_defaults() {
    let file = config_file("engine = \"X\"\ndepth = 4\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::new(Player::X, 4));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = config_file("depth = 3\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.engine(), Player::O);
    assert_eq!(*config.depth(), 3);
}

#[test]
fn test_flags_override_file() {
    let file = config_file("engine = \"X\"\n");
    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(Player::O), None);
    assert_eq!(config, GameConfig::new(Player::O, DEFAULT_DEPTH));
}

#[test]
fn test_illegal_player_rejected() {
    let file = config_file("engine = \"Z\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_depth_rejected() {
    let file = config_file("depth = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("depth"));
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}
