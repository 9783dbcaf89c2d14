//! Move selection for the computer player.
//!
//! A strategy maps a board snapshot to a move for the player on turn. The
//! heuristic bot evaluates an ordered cascade of independent rules, one
//! cascade per phase, and plays the first rule that yields a move.

mod heuristic;
mod movement;
mod placement;

pub use heuristic::HeuristicBot;
pub use movement::{MovementContext, MovementRule, Shift};
pub use placement::PlacementRule;

use crate::{Board, Move, Player};

/// Chooses moves for the player on turn.
pub trait Strategy {
    /// Picks a move for `board.to_move()`.
    ///
    /// # Errors
    ///
    /// Returns a [`StrategyError`] when the board offers no legal move,
    /// which correct play never produces.
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        (**self).choose_move(board)
    }
}

/// Internal-state failures of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// Placement phase without a single empty square.
    #[display("No empty squares left to place on")]
    NoEmptySquares,

    /// Movement phase without a legal slide.
    #[display("Player {} has no legal movement moves", player)]
    NoLegalMoves {
        /// Player on turn.
        player: Player,
    },
}

impl std::error::Error for StrategyError {}
