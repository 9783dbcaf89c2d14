//! Player trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use slide_tictactoe::{Board, Move};

/// What a player does with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Submit a move to the engine.
    Play(Move),
    /// Abandon the game.
    Quit,
}

/// Trait for players that can take turns.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Produces this player's next turn for `board`.
    ///
    /// The move is not validated here; the orchestrator applies it and
    /// decides what to do with a rejection.
    async fn next_turn(&mut self, board: &Board) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether rejected moves are reported back and re-requested.
    fn is_interactive(&self) -> bool {
        false
    }
}
