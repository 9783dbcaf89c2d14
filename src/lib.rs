//! Slide Games - console front end for sliding tic-tac-toe.
//!
//! The rules and the bot live in [`slide_tictactoe`]; this crate adds
//! configuration, the command line and the game loop that pits a human
//! (or a second bot) against the [`HeuristicBot`](slide_tictactoe::HeuristicBot).
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults, overridden by CLI flags
//! - **Console**: players, the [`Orchestrator`] and event rendering
//! - **Self-play**: repeated bot-versus-bot games with a tally

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod console;
pub mod selfplay;

pub use config::{ConfigError, GameConfig};
pub use console::{
    BotPlayer, GameEvent, GameOutcome, HumanPlayer, Orchestrator, Player, Turn, render_events,
};
pub use selfplay::{DEFAULT_SELFPLAY_MAX_TURNS, SelfPlaySummary, run_selfplay};
