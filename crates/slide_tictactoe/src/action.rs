//! First-class move requests.
//!
//! A move is the player's intent. It carries raw caller coordinates and is
//! validated only when applied to a board.

use crate::{Coord, GamePhase, Player, Position};
use serde::{Deserialize, Serialize};

/// Kind of move request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum MoveKind {
    /// Drop a new piece on an empty square (Placement phase).
    Place,
    /// Slide an existing piece to an adjacent empty square (Movement phase).
    Shift,
}

/// A move request: a player acting on a target square, optionally from a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Place or shift.
    pub kind: MoveKind,
    /// Destination square (1-based).
    pub target: Coord,
    /// Origin square (1-based), shift moves only.
    pub source: Option<Coord>,
}

impl Move {
    /// Creates a placement request at 1-based `(row, col)`.
    pub fn place(player: Player, target: impl Into<Coord>) -> Self {
        Self {
            player,
            kind: MoveKind::Place,
            target: target.into(),
            source: None,
        }
    }

    /// Creates a shift request from `source` to `target` (both 1-based).
    pub fn shift(player: Player, source: impl Into<Coord>, target: impl Into<Coord>) -> Self {
        Self {
            player,
            kind: MoveKind::Shift,
            target: target.into(),
            source: Some(source.into()),
        }
    }

    /// Target square, if the coordinates are on the board.
    pub fn target_position(&self) -> Option<Position> {
        self.target.position().ok()
    }

    /// Source square, if present and on the board.
    pub fn source_position(&self) -> Option<Position> {
        self.source.and_then(|c| c.position().ok())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Some(source) => write!(f, "{} {} -> {}", self.player, source, self.target),
            None => write!(f, "{} -> {}", self.player, self.target),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside 1..=3.
    #[display("Coordinates must be between 1 and 3, got {}", _0)]
    OutOfRange(Coord),

    /// It's not this player's turn.
    #[display("It's not {}'s turn ({} to move)", actual, expected)]
    WrongPlayer {
        /// Player whose turn it is.
        expected: Player,
        /// Player named in the move.
        actual: Player,
    },

    /// The target square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The player has no pieces left to place.
    #[display("Player {} has already placed all pieces", _0)]
    PiecesExhausted(Player),

    /// A movement-phase move did not name its source square.
    #[display("Movement moves must specify a source square")]
    MissingSource,

    /// The source square does not hold the player's piece.
    #[display("Square {} does not contain {}'s piece", square, player)]
    NotOwnPiece {
        /// Source square.
        square: Position,
        /// Acting player.
        player: Player,
    },

    /// The target is not reachable from the source in one step.
    #[display("Square {} is not adjacent to {}", to, from)]
    NotAdjacent {
        /// Source square.
        from: Position,
        /// Target square.
        to: Position,
    },

    /// A postcondition failed after applying a move.
    #[display("Invariant violation in {} phase: {}", phase, message)]
    InvariantViolation {
        /// Phase of the board the move was applied to.
        phase: GamePhase,
        /// Violated properties.
        message: String,
    },
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for rule violations a caller may correct and retry.
    ///
    /// Invariant violations indicate an engine bug and return false.
    pub fn is_validation(&self) -> bool {
        !matches!(self, MoveError::InvariantViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_has_no_source() {
        let mv = Move::place(Player::X, (1, 2));
        assert_eq!(mv.kind, MoveKind::Place);
        assert_eq!(mv.source, None);
        assert_eq!(mv.target_position(), Some(Position::TopCenter));
    }

    #[test]
    fn test_shift_positions() {
        let mv = Move::shift(Player::O, Position::Center, Position::TopLeft);
        assert_eq!(mv.source_position(), Some(Position::Center));
        assert_eq!(mv.target_position(), Some(Position::TopLeft));
        assert_eq!(mv.to_string(), "O (2, 2) -> (1, 1)");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = MoveError::OutOfRange(Coord::new(4, 1));
        assert!(err.to_string().contains("between 1 and 3"));
        assert!(err.is_validation());
    }
}
