//! Piece-count invariants: pieces on the board match the placement counters.

use super::Invariant;
use crate::{Board, PIECES_PER_PLAYER, Player};
use strum::IntoEnumIterator;

/// Invariant: no player ever has more than three pieces.
pub struct PieceLimitInvariant;

impl Invariant<Board> for PieceLimitInvariant {
    fn holds(board: &Board) -> bool {
        Player::iter().all(|p| {
            board.player_pieces(p).count() <= PIECES_PER_PLAYER as usize
                && board.pieces_placed(p) <= PIECES_PER_PLAYER
        })
    }

    fn description() -> &'static str {
        "Each player has at most three pieces"
    }
}

/// Invariant: each player's pieces on the board equal the pieces they placed.
///
/// Movement only relocates pieces, so this holds in both phases and the
/// occupied total equals the sum of the counters.
pub struct PieceCountInvariant;

impl Invariant<Board> for PieceCountInvariant {
    fn holds(board: &Board) -> bool {
        Player::iter().all(|p| board.player_pieces(p).count() == board.pieces_placed(p) as usize)
    }

    fn description() -> &'static str {
        "Pieces on the board match the placement counters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, Move, Square};

    #[test]
    fn test_holds_through_placement() {
        let mut board = Board::new();
        for (player, coord) in [(Player::X, (1, 1)), (Player::O, (2, 2)), (Player::X, (3, 3))] {
            board = board.apply(&Move::place(player, coord)).unwrap();
            assert!(PieceCountInvariant::holds(&board));
            assert!(PieceLimitInvariant::holds(&board));
        }
    }

    #[test]
    fn test_detects_extra_piece() {
        let mut squares = [Square::Empty; 9];
        for sq in squares.iter_mut().take(4) {
            *sq = Square::Occupied(Player::O);
        }
        let board = Board::from_squares(squares, Player::X, GamePhase::Placement);
        assert!(!PieceLimitInvariant::holds(&board));
        assert!(!PieceCountInvariant::holds(&board));
    }
}
