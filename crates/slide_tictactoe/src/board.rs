//! Immutable board snapshots and the move-application state machine.

use crate::contracts::{ApplyContract, Contract, Resolved};
use crate::rules::{check_winner, is_adjacent, is_full};
use crate::{GamePhase, GameStatus, Move, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Pieces each player places before the Movement phase.
pub const PIECES_PER_PLAYER: u8 = 3;

/// 3x3 board snapshot: squares, player on turn, phase and placement counters.
///
/// Boards are never mutated. [`Board::apply`] returns a new board and leaves
/// the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Player to move.
    to_move: Player,
    /// Current phase.
    phase: GamePhase,
    /// Pieces placed so far, indexed by [`Player::index`].
    placed: [u8; 2],
}

impl Board {
    /// Creates the empty initial board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            to_move: Player::X,
            phase: GamePhase::Placement,
            placed: [0, 0],
        }
    }

    /// Builds an arbitrary snapshot.
    ///
    /// Placement counters are each player's piece count, clamped to
    /// [`PIECES_PER_PLAYER`]. No consistency checks are made here; run
    /// [`crate::invariants::check_board`] on untrusted snapshots, including
    /// deserialized ones.
    ///
    /// [`Board::apply`] re-checks the invariants only in debug builds. On an
    /// inconsistent snapshot a debug build returns
    /// [`MoveError::InvariantViolation`] while a release build applies the
    /// move as long as its preconditions pass.
    pub fn from_squares(squares: [Square; 9], to_move: Player, phase: GamePhase) -> Self {
        let count = |player: Player| {
            let n = squares.iter().filter(|s| s.is(player)).count();
            n.min(PIECES_PER_PLAYER as usize) as u8
        };
        Self {
            squares,
            to_move,
            phase,
            placed: [count(Player::X), count(Player::O)],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Pieces `player` has placed (0-3).
    pub fn pieces_placed(&self, player: Player) -> u8 {
        self.placed[player.index()]
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Applies a move and returns the resulting board.
    ///
    /// Placement drops a piece and passes the turn, except on the placement
    /// that exhausts both quotas: the phase switches to Movement and the same
    /// player moves again. Movement slides a piece and always passes the turn.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition, checked in order: target range,
    /// turn, then the phase-specific rules. Never partially applies a move.
    #[instrument(skip(self, mv), fields(phase = %self.phase, to_move = %self.to_move, mv = %mv))]
    pub fn apply(&self, mv: &Move) -> Result<Board, MoveError> {
        let resolved = ApplyContract::pre(self, mv)?;

        let mut next = self.clone();
        match resolved {
            Resolved::Place(target) => {
                next.squares[target.to_index()] = Square::Occupied(mv.player);
                next.placed[mv.player.index()] += 1;
                if next.placed.iter().all(|&n| n == PIECES_PER_PLAYER) {
                    debug!(player = %mv.player, "Both quotas placed, entering Movement");
                    next.phase = GamePhase::Movement;
                } else {
                    next.to_move = mv.player.opponent();
                }
            }
            Resolved::Shift { from, to } => {
                next.squares[from.to_index()] = Square::Empty;
                next.squares[to.to_index()] = Square::Occupied(mv.player);
                next.to_move = mv.player.opponent();
            }
        }

        #[cfg(debug_assertions)]
        ApplyContract::post(self, &next)?;

        Ok(next)
    }

    /// Reports whether the game is won, drawn, or still in progress.
    ///
    /// A draw requires a full board, which only the Placement phase can
    /// produce. During Movement a board without a line is always in progress.
    #[instrument(level = "debug", skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_winner(self) {
            return GameStatus::Won(winner);
        }
        match self.phase {
            GamePhase::Placement if is_full(self) => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    /// Empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Squares holding `player`'s pieces, in row-major order.
    pub fn player_pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.get(pos).is(player))
    }

    /// Legal slides for `player` as (from, to), ordered by source then target.
    ///
    /// Empty outside the Movement phase.
    pub fn legal_shifts(&self, player: Player) -> impl Iterator<Item = (Position, Position)> + '_ {
        let active = self.phase == GamePhase::Movement;
        self.player_pieces(player)
            .filter(move |_| active)
            .flat_map(move |from| {
                from.neighbors()
                    .filter(move |&to| self.is_empty(to) && is_adjacent(from, to))
                    .map(move |to| (from, to))
            })
    }

    /// Legal movement-phase moves for `player`, ordered by source then target.
    ///
    /// Empty outside the Movement phase. Recomputed on every call.
    pub fn valid_movement_moves(&self, player: Player) -> impl Iterator<Item = Move> + '_ {
        self.legal_shifts(player)
            .map(move |(from, to)| Move::shift(player, from, to))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "    1   2   3")?;
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| self.get(pos).symbol().to_string())
                .collect();
            writeln!(f, "{}   {}", row + 1, symbols.join(" | "))?;
            if row < 2 {
                writeln!(f, "   ---+---+---")?;
            }
        }
        Ok(())
    }
}
