//! First-class invariants for sliding tic-tac-toe boards.
//!
//! Invariants are logical properties every board produced by
//! [`Board::apply`](crate::Board::apply) must satisfy. They are testable
//! independently and checked after each move in debug builds.

mod phase_consistent;
mod piece_count;

pub use phase_consistent::PhaseConsistentInvariant;
pub use piece_count::{PieceCountInvariant, PieceLimitInvariant};

use crate::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a board must satisfy.
pub type BoardInvariants = (
    PieceLimitInvariant,
    PieceCountInvariant,
    PhaseConsistentInvariant,
);

/// Checks [`BoardInvariants`] against `board`.
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}
