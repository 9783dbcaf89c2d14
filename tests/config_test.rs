//! Tests for loading game configuration from disk.

use slide_games::GameConfig;
use slide_tictactoe::Player as Mark;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "human_mark = \"O\"\nhuman_name = \"Ada\"\nbot_delay_ms = 0\nmax_turns = 50"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.human_mark(), &Mark::O);
    assert_eq!(config.human_name(), "Ada");
    assert_eq!(config.bot_name(), "Bot");
    assert_eq!(config.bot_delay(), Duration::ZERO);
    assert_eq!(config.max_turns(), &Some(50));
    assert_eq!(config.seed(), &None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.human_mark(), &Mark::X);
    assert_eq!(config.bot_delay_ms(), &800);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"Z\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
