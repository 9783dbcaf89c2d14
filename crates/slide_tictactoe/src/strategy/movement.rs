//! Movement-phase cascade.
//!
//! All rules read the same pre-move snapshot through a [`MovementContext`],
//! so every candidate is judged against one consistent board.

use crate::rules::completes_line;
use crate::{Board, Player, Position};
use strum::IntoEnumIterator;

/// A slide from one square to another.
pub type Shift = (Position, Position);

/// Legal slides for both sides, computed once per decision.
#[derive(Debug, Clone)]
pub struct MovementContext<'a> {
    board: &'a Board,
    me: Player,
    own: Vec<Shift>,
    opponent: Vec<Shift>,
}

impl<'a> MovementContext<'a> {
    /// Snapshots the legal slides of `me` and of the opponent.
    pub fn new(board: &'a Board, me: Player) -> Self {
        Self {
            board,
            me,
            own: board.legal_shifts(me).collect(),
            opponent: board.legal_shifts(me.opponent()).collect(),
        }
    }

    /// Player the context decides for.
    pub fn me(&self) -> Player {
        self.me
    }

    /// Own legal slides in generation order.
    pub fn own_shifts(&self) -> &[Shift] {
        &self.own
    }

    /// Opponent legal slides in generation order.
    pub fn opponent_shifts(&self) -> &[Shift] {
        &self.opponent
    }

    fn wins(&self, (from, to): Shift, player: Player) -> bool {
        completes_line(self.board, Some(from), to, player)
    }
}

/// Movement rules in priority order. The first rule that selects a slide wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum MovementRule {
    /// A slide that completes an own line.
    WinNow,
    /// Occupy the target of the opponent's first winning slide.
    Block,
    /// A slide that lands next to another own piece.
    Cluster,
    /// First legal slide.
    FirstLegal,
}

impl MovementRule {
    /// Evaluates this rule alone.
    pub fn select(self, ctx: &MovementContext<'_>) -> Option<Shift> {
        match self {
            MovementRule::WinNow => ctx
                .own
                .iter()
                .copied()
                .find(|&shift| ctx.wins(shift, ctx.me)),
            MovementRule::Block => {
                let (_, threat) = ctx
                    .opponent
                    .iter()
                    .copied()
                    .find(|&shift| ctx.wins(shift, ctx.me.opponent()))?;
                ctx.own.iter().copied().find(|&(_, to)| to == threat)
            }
            MovementRule::Cluster => ctx.own.iter().copied().find(|&(from, to)| {
                ctx.board
                    .player_pieces(ctx.me)
                    .any(|own| own != from && own.is_neighbor(to))
            }),
            MovementRule::FirstLegal => ctx.own.first().copied(),
        }
    }

    /// Runs the whole cascade and reports which rule fired.
    pub fn cascade(ctx: &MovementContext<'_>) -> Option<(MovementRule, Shift)> {
        MovementRule::iter().find_map(|rule| rule.select(ctx).map(|shift| (rule, shift)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, Square};

    fn board(layout: &str, to_move: Player) -> Board {
        let mut squares = [Square::Empty; 9];
        for (sq, ch) in squares.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            *sq = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares, to_move, GamePhase::Movement)
    }

    #[test]
    fn test_context_generation_order() {
        let b = board("XX. ..X OOO", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(
            ctx.own_shifts(),
            &[
                (Position::TopLeft, Position::MiddleLeft),
                (Position::TopLeft, Position::Center),
                (Position::TopCenter, Position::TopRight),
                (Position::TopCenter, Position::Center),
                (Position::MiddleRight, Position::TopRight),
                (Position::MiddleRight, Position::Center),
            ]
        );
    }

    #[test]
    fn test_win_now_slides_into_row() {
        let b = board("XX. ..X OOO", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(
            MovementRule::cascade(&ctx),
            Some((MovementRule::WinNow, (Position::MiddleRight, Position::TopRight)))
        );
    }

    #[test]
    fn test_moving_piece_of_the_line_is_not_a_win() {
        // X: TL TC BR. TC -> TR would leave TC empty, so no top-row win.
        let b = board("XX. .OO O.X", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(MovementRule::WinNow.select(&ctx), None);
    }

    #[test]
    fn test_block_occupies_threat_target() {
        // O threatens MR -> BR for the bottom row; X's center reaches BR.
        let b = board("X.. XXO OO.", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(MovementRule::WinNow.select(&ctx), None);
        assert_eq!(
            MovementRule::Block.select(&ctx),
            Some((Position::Center, Position::BottomRight))
        );
    }

    #[test]
    fn test_block_needs_reachable_target() {
        // O's winning slide MR -> BR; no X piece can reach BR.
        let b = board("XX. X.O OO.", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(MovementRule::Block.select(&ctx), None);
    }

    #[test]
    fn test_cluster_ignores_own_source() {
        // TC -> TL only touches its own vacated square; BL -> ML touches TC.
        let b = board(".XO .O. XOX", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(MovementRule::WinNow.select(&ctx), None);
        assert_eq!(MovementRule::Block.select(&ctx), None);
        assert_eq!(ctx.own_shifts()[0], (Position::TopCenter, Position::TopLeft));
        assert_eq!(
            MovementRule::Cluster.select(&ctx),
            Some((Position::BottomLeft, Position::MiddleLeft))
        );
    }

    #[test]
    fn test_cluster_accepts_kept_contact() {
        // TL already touches C; after TL -> TC it still does.
        let b = board("X.O .XO XO.", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert!(Position::TopLeft.is_neighbor(Position::Center));
        assert_eq!(
            MovementRule::Cluster.select(&ctx),
            Some((Position::TopLeft, Position::TopCenter))
        );
    }

    #[test]
    fn test_first_legal() {
        let b = board("XX. ..X OOO", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert_eq!(
            MovementRule::FirstLegal.select(&ctx),
            Some((Position::TopLeft, Position::MiddleLeft))
        );
    }

    #[test]
    fn test_no_moves_yields_nothing() {
        // X pinned to the top row by O's middle row.
        let b = board("XXX OOO ...", Player::X);
        let ctx = MovementContext::new(&b, Player::X);
        assert!(ctx.own_shifts().is_empty());
        assert_eq!(MovementRule::cascade(&ctx), None);
    }
}
