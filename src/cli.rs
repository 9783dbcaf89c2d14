//! Command-line interface for slide_games.

use crate::selfplay::DEFAULT_SELFPLAY_MAX_TURNS;
use clap::{Parser, Subcommand};
use slide_tictactoe::Player as Mark;
use std::path::PathBuf;

/// Slide Games - sliding tic-tac-toe against a heuristic bot
#[derive(Parser, Debug)]
#[command(name = "slide_games")]
#[command(about = "Sliding tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the bot on the console
    Play {
        /// Path to game config (defaults apply if the file is missing)
        #[arg(short, long, default_value = "slide_games.toml")]
        config: PathBuf,

        /// Mark to play as (X moves first)
        #[arg(long)]
        human: Option<Mark>,

        /// Seed for the bot's random opening
        #[arg(long)]
        seed: Option<u64>,

        /// Bot thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Stop the game after this many moves
        #[arg(long)]
        max_turns: Option<u32>,
    },

    /// Let two bots play each other
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Base seed; each game derives its own
        #[arg(long)]
        seed: Option<u64>,

        /// Move cap per game
        #[arg(long, default_value_t = DEFAULT_SELFPLAY_MAX_TURNS)]
        max_turns: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "slide_games",
            "play",
            "--human",
            "o",
            "--seed",
            "5",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                human,
                seed,
                delay_ms,
                max_turns,
                ..
            } => {
                assert_eq!(human, Some(Mark::O));
                assert_eq!(seed, Some(5));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(max_turns, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_selfplay_defaults() {
        let cli = Cli::try_parse_from(["slide_games", "selfplay"]).unwrap();
        match cli.command {
            Command::Selfplay {
                games,
                seed,
                max_turns,
            } => {
                assert_eq!(games, 10);
                assert_eq!(seed, None);
                assert_eq!(max_turns, DEFAULT_SELFPLAY_MAX_TURNS);
                assert_eq!(max_turns, 200);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
