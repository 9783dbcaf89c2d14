//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use slide_tictactoe::Player;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the human. X always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the bot.
    #[serde(default = "default_bot_name")]
    bot_name: String,

    /// Pause before the bot reveals its move, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// Seed for the bot's opening tie-break. Unset draws from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Stop after this many moves. Unset plays until someone wins.
    #[serde(default)]
    max_turns: Option<u32>,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_bot_name() -> String {
    "Bot".to_string()
}

fn default_bot_delay_ms() -> u64 {
    800
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            human_name: default_human_name(),
            bot_name: default_bot_name(),
            bot_delay_ms: default_bot_delay_ms(),
            seed: None,
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Mark played by the bot.
    pub fn bot_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Bot delay as a duration.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
    }

    /// Overrides the bot delay.
    pub fn with_bot_delay_ms(mut self, ms: u64) -> Self {
        self.bot_delay_ms = ms;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the move cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
