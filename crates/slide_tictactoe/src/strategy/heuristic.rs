//! The rule-cascade bot.

use super::{MovementContext, MovementRule, PlacementRule, Strategy, StrategyError};
use crate::{Board, GamePhase, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Heuristic bot playing for whichever player is on turn.
///
/// The only randomness is the opening tie-break, drawn from the injected
/// random source.
#[derive(Debug, Clone)]
pub struct HeuristicBot<R = StdRng> {
    rng: R,
}

impl<R: Rng> HeuristicBot<R> {
    /// Creates a bot drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl HeuristicBot<StdRng> {
    /// Creates a reproducible bot.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a bot seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for HeuristicBot<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Strategy for HeuristicBot<R> {
    #[instrument(skip(self, board), fields(phase = %board.phase(), player = %board.to_move()))]
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        let me = board.to_move();
        match board.phase() {
            GamePhase::Placement => {
                let (rule, pos) = PlacementRule::cascade(board, me, &mut self.rng)
                    .ok_or(StrategyError::NoEmptySquares)?;
                debug!(%rule, square = %pos, "Placement rule fired");
                Ok(Move::place(me, pos))
            }
            GamePhase::Movement => {
                let ctx = MovementContext::new(board, me);
                let (rule, (from, to)) = MovementRule::cascade(&ctx)
                    .ok_or(StrategyError::NoLegalMoves { player: me })?;
                debug!(%rule, %from, %to, "Movement rule fired");
                Ok(Move::shift(me, from, to))
            }
        }
    }
}
