//! Win detection, on the real board and under a hypothetical move.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three squares that win when held by one player.
pub type Line = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete line decides.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Would `line` belong entirely to `player` after a hypothetical move?
///
/// `target` counts as `player`'s regardless of the board. `source`, when
/// given, counts for nobody. Every other square is read from the board.
pub fn would_complete(
    board: &Board,
    line: &Line,
    source: Option<Position>,
    target: Position,
    player: Player,
) -> bool {
    line.iter().all(|&pos| {
        if pos == target {
            true
        } else if Some(pos) == source {
            false
        } else {
            board.get(pos).is(player)
        }
    })
}

/// Would any line belong to `player` after moving to `target` (from `source`)?
#[instrument(level = "trace", skip(board))]
pub fn completes_line(
    board: &Board,
    source: Option<Position>,
    target: Position,
    player: Player,
) -> bool {
    LINES
        .iter()
        .any(|line| would_complete(board, line, source, target, player))
}
