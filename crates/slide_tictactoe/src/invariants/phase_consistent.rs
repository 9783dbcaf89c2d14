//! Phase invariant: Movement exactly when both quotas are exhausted.

use super::Invariant;
use crate::{Board, GamePhase, PIECES_PER_PLAYER, Player};

/// Invariant: the phase is Movement iff both players placed all pieces.
pub struct PhaseConsistentInvariant;

impl Invariant<Board> for PhaseConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let done = board.pieces_placed(Player::X) == PIECES_PER_PLAYER
            && board.pieces_placed(Player::O) == PIECES_PER_PLAYER;
        done == (board.phase() == GamePhase::Movement)
    }

    fn description() -> &'static str {
        "Phase is Movement exactly when both players placed three pieces"
    }
}
