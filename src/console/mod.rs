//! Console play: players, the game loop and its text rendering.
//!
//! The [`Orchestrator`] owns the board and asks each [`Player`] for a turn.
//! Progress is published as [`GameEvent`]s, which [`render_events`] prints.

mod input;
mod orchestrator;
mod players;
mod render;

pub use input::{Command, InputError, parse_command, usage};
pub use orchestrator::{GameEvent, GameOutcome, Orchestrator};
pub use players::{BotPlayer, HumanPlayer, Player, Turn};
pub use render::{describe, render_events};
