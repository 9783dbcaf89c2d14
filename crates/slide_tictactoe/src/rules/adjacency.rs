//! Movement adjacency.
//!
//! A piece moves one king-step, except along the four short diagonals that
//! join two edge midpoints. Corner-to-center diagonals stay legal.

use crate::Position;

/// Diagonal steps that are never legal, in either direction.
pub const FORBIDDEN_DIAGONALS: [(Position, Position); 4] = [
    (Position::TopCenter, Position::MiddleLeft),
    (Position::TopCenter, Position::MiddleRight),
    (Position::MiddleLeft, Position::BottomCenter),
    (Position::MiddleRight, Position::BottomCenter),
];

/// Returns true if a piece on `from` may slide to `to`.
pub fn is_adjacent(from: Position, to: Position) -> bool {
    from.is_neighbor(to)
        && !FORBIDDEN_DIAGONALS
            .iter()
            .any(|&(a, b)| (from, to) == (a, b) || (from, to) == (b, a))
}
