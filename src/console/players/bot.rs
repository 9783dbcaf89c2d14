//! Computer player backed by a move strategy.

use super::{Player, Turn};
use anyhow::Result;
use slide_tictactoe::{Board, Strategy};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bot that pauses before revealing the strategy's move.
pub struct BotPlayer<S> {
    name: String,
    strategy: S,
    delay: Duration,
}

impl<S: Strategy> BotPlayer<S> {
    /// Creates a bot with no delay.
    pub fn new(name: impl Into<String>, strategy: S) -> Self {
        Self {
            name: name.into(),
            strategy,
            delay: Duration::ZERO,
        }
    }

    /// Sets the pause before each move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl<S: Strategy + Send> Player for BotPlayer<S> {
    #[instrument(skip(self, board), fields(bot = %self.name))]
    async fn next_turn(&mut self, board: &Board) -> Result<Turn> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mv = self.strategy.choose_move(board)?;
        debug!(%mv, "Bot chose move");
        Ok(Turn::Play(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_tictactoe::{HeuristicBot, Move, Player as Mark, Position};

    #[tokio::test]
    async fn test_bot_plays_for_side_to_move() {
        let mut bot = BotPlayer::new("Bot", HeuristicBot::seeded(3));
        let turn = bot.next_turn(&Board::new()).await.unwrap();
        assert_eq!(turn, Turn::Play(Move::place(Mark::X, Position::Center)));
        assert!(!bot.is_interactive());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_elapses_before_move() {
        let mut bot =
            BotPlayer::new("Bot", HeuristicBot::seeded(3)).with_delay(Duration::from_millis(800));
        let start = tokio::time::Instant::now();
        bot.next_turn(&Board::new()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
    }
}
