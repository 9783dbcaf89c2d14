//! Contract-based validation for move application.
//!
//! Preconditions run in a fixed order and the first failure is reported.
//! Postconditions compare the board before and after a move.

use crate::invariants::check_board;
use crate::{Board, GamePhase, Move, MoveError, MoveKind, PIECES_PER_PLAYER, Player, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a successful precondition check learned about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A move whose coordinates were resolved against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// Drop a piece on this square.
    Place(Position),
    /// Slide a piece between these squares.
    Shift {
        /// Vacated square.
        from: Position,
        /// Occupied square.
        to: Position,
    },
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target coordinates are on the board.
pub struct TargetInRange;

impl TargetInRange {
    /// Resolves the target square.
    pub fn check(mov: &Move) -> Result<Position, MoveError> {
        mov.target.position()
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not on turn.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if mov.player != board.to_move() {
            Err(MoveError::WrongPlayer {
                expected: board.to_move(),
                actual: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied targets.
    pub fn check(pos: Position, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(pos) {
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the player still has pieces to place.
pub struct PiecesRemaining;

impl PiecesRemaining {
    /// Rejects placements beyond the quota.
    pub fn check(player: Player, board: &Board) -> Result<(), MoveError> {
        if board.pieces_placed(player) >= PIECES_PER_PLAYER {
            Err(MoveError::PiecesExhausted(player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a shift names a source holding the player's own piece.
pub struct SourceIsOwnPiece;

impl SourceIsOwnPiece {
    /// Resolves the source square.
    pub fn check(mov: &Move, board: &Board) -> Result<Position, MoveError> {
        let source = match (mov.kind, mov.source) {
            (MoveKind::Shift, Some(source)) => source,
            _ => return Err(MoveError::MissingSource),
        };
        let square = source.position()?;
        if !board.get(square).is(mov.player) {
            return Err(MoveError::NotOwnPiece {
                square,
                player: mov.player,
            });
        }
        Ok(square)
    }
}

/// Precondition: the step obeys the adjacency rule.
pub struct StepIsAdjacent;

impl StepIsAdjacent {
    /// Rejects non-adjacent and forbidden diagonal steps.
    pub fn check(from: Position, to: Position) -> Result<(), MoveError> {
        if crate::rules::is_adjacent(from, to) {
            Ok(())
        } else {
            Err(MoveError::NotAdjacent { from, to })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Apply Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Board::apply`].
///
/// Preconditions, in order:
/// - Target in range
/// - Player's turn
/// - Placement: target empty, pieces remaining
/// - Movement: source given and own, target empty, step adjacent
///
/// Postconditions:
/// - Board invariants hold
/// - Phase never reverts to Placement
/// - Movement keeps the occupied-square count
pub struct ApplyContract;

impl Contract<Board, Move> for ApplyContract {
    type Checked = Resolved;

    #[instrument(level = "trace", skip(board))]
    fn pre(board: &Board, action: &Move) -> Result<Resolved, MoveError> {
        let target = TargetInRange::check(action)?;
        PlayersTurn::check(action, board)?;

        match board.phase() {
            GamePhase::Placement => {
                SquareIsEmpty::check(target, board)?;
                PiecesRemaining::check(action.player, board)?;
                Ok(Resolved::Place(target))
            }
            GamePhase::Movement => {
                let from = SourceIsOwnPiece::check(action, board)?;
                SquareIsEmpty::check(target, board)?;
                StepIsAdjacent::check(from, target)?;
                Ok(Resolved::Shift { from, to: target })
            }
        }
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let mut problems: Vec<String> = match check_board(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if before.phase() == GamePhase::Movement {
            if after.phase() != GamePhase::Movement {
                problems.push("Phase reverted to Placement".to_string());
            }
            if before.occupied_count() != after.occupied_count() {
                problems.push("Occupied squares changed during Movement".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            let message = problems.join("; ");
            warn!(%message, "Postcondition failed");
            Err(MoveError::InvariantViolation {
                phase: before.phase(),
                message,
            })
        }
    }
}
