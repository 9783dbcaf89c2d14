//! Board positions and the 1-based coordinates used at the API boundary.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the 3x3 board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center square.
    pub const CENTER: Position = Position::Center;

    /// Corners in the order the bot scans them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Edge midpoints in the order the bot scans them: top, left, right, bottom.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// One-based coordinates of this position.
    pub fn coord(self) -> Coord {
        Coord::new(self.row() + 1, self.col() + 1)
    }

    /// Returns true if `other` lies in the 8-neighborhood of `self`.
    pub fn is_neighbor(self, other: Position) -> bool {
        self != other && self.row().abs_diff(other.row()) <= 1 && self.col().abs_diff(other.col()) <= 1
    }

    /// Iterates the 8-neighborhood in row-major order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Self::ALL.into_iter().filter(move |other| self.is_neighbor(*other))
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coord())
    }
}

/// A raw 1-based (row, column) pair as supplied by a caller.
///
/// Nothing guarantees the pair is on the board; [`Coord::position`]
/// performs the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, 1-3 when valid.
    pub row: usize,
    /// Column, 1-3 when valid.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate pair without validating it.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps the pair to a board position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless both values are in 1..=3.
    #[instrument(level = "trace")]
    pub fn position(self) -> Result<Position, MoveError> {
        if (1..=3).contains(&self.row) && (1..=3).contains(&self.col) {
            Position::from_row_col(self.row - 1, self.col - 1).ok_or(MoveError::OutOfRange(self))
        } else {
            Err(MoveError::OutOfRange(self))
        }
    }
}

impl From<Position> for Coord {
    fn from(pos: Position) -> Self {
        pos.coord()
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
