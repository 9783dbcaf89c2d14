//! Parsing console lines into moves.
//!
//! Placement expects `row col`, movement expects `row col row col`
//! (source then target). Commas may stand in for spaces. Range checks are
//! left to the engine so that `4 1` surfaces as an out-of-range move rather
//! than a format error.

use slide_tictactoe::{Coord, GamePhase, Move, Player as Mark};

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit a move.
    Play(Move),
    /// Leave the game.
    Quit,
}

/// Malformed console input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("Enter a move or 'q' to quit")]
    Empty,

    /// A token is not a non-negative integer.
    #[display("'{}' is not a row or column number", _0)]
    NotANumber(String),

    /// Too few or too many numbers for the current phase.
    #[display("Expected {} numbers during {}, got {}", expected, phase, found)]
    WrongArity {
        /// Phase the move was entered in.
        phase: GamePhase,
        /// Numbers the phase needs.
        expected: usize,
        /// Numbers actually entered.
        found: usize,
    },
}

impl std::error::Error for InputError {}

/// Input hint for the phase.
pub fn usage(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Placement => "row col",
        GamePhase::Movement => "from_row from_col to_row to_col",
    }
}

/// Parses one line for `mark` in `phase`.
pub fn parse_command(line: &str, mark: Mark, phase: GamePhase) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let numbers = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| InputError::NotANumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match (phase, numbers.as_slice()) {
        (GamePhase::Placement, &[row, col]) => Ok(Command::Play(Move::place(mark, (row, col)))),
        (GamePhase::Movement, &[from_row, from_col, to_row, to_col]) => Ok(Command::Play(
            Move::shift(mark, Coord::new(from_row, from_col), Coord::new(to_row, to_col)),
        )),
        (phase, found) => Err(InputError::WrongArity {
            phase,
            expected: match phase {
                GamePhase::Placement => 2,
                GamePhase::Movement => 4,
            },
            found: found.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_pair() {
        let cmd = parse_command(" 2 3\n", Mark::X, GamePhase::Placement).unwrap();
        assert_eq!(cmd, Command::Play(Move::place(Mark::X, (2, 3))));
    }

    #[test]
    fn test_movement_with_commas() {
        let cmd = parse_command("1,1, 2,2", Mark::O, GamePhase::Movement).unwrap();
        assert_eq!(cmd, Command::Play(Move::shift(Mark::O, (1, 1), (2, 2))));
    }

    #[test]
    fn test_quit() {
        assert_eq!(
            parse_command("QUIT", Mark::X, GamePhase::Movement),
            Ok(Command::Quit)
        );
    }

    #[test]
    fn test_arity_follows_phase() {
        assert_eq!(
            parse_command("1 1", Mark::X, GamePhase::Movement),
            Err(InputError::WrongArity {
                phase: GamePhase::Movement,
                expected: 4,
                found: 2
            })
        );
        assert!(parse_command("1 1 2 2", Mark::X, GamePhase::Placement).is_err());
    }

    #[test]
    fn test_out_of_range_is_not_a_format_error() {
        let cmd = parse_command("0 4", Mark::X, GamePhase::Placement).unwrap();
        assert_eq!(cmd, Command::Play(Move::place(Mark::X, (0, 4))));
    }

    #[test]
    fn test_garbage() {
        assert_eq!(
            parse_command("a1", Mark::X, GamePhase::Placement),
            Err(InputError::NotANumber("a1".to_string()))
        );
        assert_eq!(
            parse_command("   ", Mark::X, GamePhase::Placement),
            Err(InputError::Empty)
        );
    }
}
