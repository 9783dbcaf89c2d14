//! Placement-phase cascade.

use crate::rules::completes_line;
use crate::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

/// Placement rules in priority order. The first rule that selects a square wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum PlacementRule {
    /// First own placement with the center taken: any empty square at random.
    RandomOpening,
    /// Complete a line now.
    WinNow,
    /// Fill the square that would complete the opponent's line.
    Block,
    /// Take the center.
    Center,
    /// First empty square (row-major) touching an own piece.
    NextToOwn,
    /// First empty corner: top-left, top-right, bottom-left, bottom-right.
    Corner,
    /// First empty edge midpoint: top, left, right, bottom.
    Edge,
    /// First empty square in row-major order.
    FirstEmpty,
}

impl PlacementRule {
    /// Evaluates this rule alone for `me`.
    pub fn select<R: Rng + ?Sized>(self, board: &Board, me: Player, rng: &mut R) -> Option<Position> {
        match self {
            PlacementRule::RandomOpening => {
                if board.pieces_placed(me) > 0 || board.is_empty(Position::CENTER) {
                    return None;
                }
                let empty: Vec<Position> = board.empty_squares().collect();
                empty.choose(rng).copied()
            }
            PlacementRule::WinNow => board
                .empty_squares()
                .find(|&pos| completes_line(board, None, pos, me)),
            PlacementRule::Block => board
                .empty_squares()
                .find(|&pos| completes_line(board, None, pos, me.opponent())),
            PlacementRule::Center => board
                .is_empty(Position::CENTER)
                .then_some(Position::CENTER),
            PlacementRule::NextToOwn => board
                .empty_squares()
                .find(|&pos| board.player_pieces(me).any(|own| own.is_neighbor(pos))),
            PlacementRule::Corner => first_empty_of(board, &Position::CORNERS),
            PlacementRule::Edge => first_empty_of(board, &Position::EDGES),
            PlacementRule::FirstEmpty => board.empty_squares().next(),
        }
    }

    /// Runs the whole cascade and reports which rule fired.
    pub fn cascade<R: Rng + ?Sized>(
        board: &Board,
        me: Player,
        rng: &mut R,
    ) -> Option<(PlacementRule, Position)> {
        PlacementRule::iter().find_map(|rule| rule.select(board, me, &mut *rng).map(|pos| (rule, pos)))
    }
}

fn first_empty_of(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn board(layout: &str, to_move: Player) -> Board {
        let mut squares = [Square::Empty; 9];
        for (sq, ch) in squares.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            *sq = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares, to_move, GamePhase::Placement)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_random_opening_only_when_center_taken() {
        let open = board("... ... ...", Player::X);
        assert_eq!(PlacementRule::RandomOpening.select(&open, Player::X, &mut rng()), None);

        let taken = board("... .X. ...", Player::O);
        let pos = PlacementRule::RandomOpening
            .select(&taken, Player::O, &mut rng())
            .unwrap();
        assert!(taken.is_empty(pos));
    }

    #[test]
    fn test_random_opening_picks_by_rng_index() {
        // Empty squares in row-major order: TL TC TR ML MR BL BC BR.
        let taken = board("... .X. ...", Player::O);
        let mut first = StepRng::new(0, 0);
        assert_eq!(
            PlacementRule::RandomOpening.select(&taken, Player::O, &mut first),
            Some(Position::TopLeft)
        );
        // A draw of 3/8 of the u32 range selects the fourth empty square.
        let mut fourth = StepRng::new(3 << 29, 0);
        assert_eq!(
            PlacementRule::RandomOpening.select(&taken, Player::O, &mut fourth),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_random_opening_skipped_after_first_piece() {
        let b = board("O.. .X. X..", Player::O);
        assert_eq!(PlacementRule::RandomOpening.select(&b, Player::O, &mut rng()), None);
    }

    #[test]
    fn test_win_before_block() {
        // O can win on the top row; X threatens the middle row.
        let b = board("OO. XX. ...", Player::O);
        let (rule, pos) = PlacementRule::cascade(&b, Player::O, &mut rng()).unwrap();
        assert_eq!(rule, PlacementRule::WinNow);
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_block() {
        let b = board("XX. .O. ...", Player::O);
        assert_eq!(
            PlacementRule::cascade(&b, Player::O, &mut rng()),
            Some((PlacementRule::Block, Position::TopRight))
        );
    }

    #[test]
    fn test_center() {
        let b = board("X.. ... ...", Player::O);
        assert_eq!(
            PlacementRule::cascade(&b, Player::O, &mut rng()),
            Some((PlacementRule::Center, Position::Center))
        );
    }

    #[test]
    fn test_next_to_own_row_major() {
        // O holds the center so every empty square touches it; first is TC.
        let b = board("X.. .O. ..X", Player::O);
        assert_eq!(
            PlacementRule::NextToOwn.select(&b, Player::O, &mut rng()),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_corner_order() {
        let b = board("X.. ... ...", Player::O);
        assert_eq!(PlacementRule::Corner.select(&b, Player::O, &mut rng()), Some(Position::TopRight));
    }

    #[test]
    fn test_edge_order() {
        let b = board("XXX O.. ...", Player::O);
        assert_eq!(PlacementRule::Edge.select(&b, Player::O, &mut rng()), Some(Position::MiddleRight));
    }

    #[test]
    fn test_first_empty() {
        let b = board("XOX OXO ..X", Player::O);
        assert_eq!(PlacementRule::FirstEmpty.select(&b, Player::O, &mut rng()), Some(Position::BottomLeft));
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let b = board("XOX OXO OXO", Player::O);
        assert_eq!(PlacementRule::cascade(&b, Player::O, &mut rng()), None);
    }
}
