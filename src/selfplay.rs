//! Bot-versus-bot matches.

use crate::console::{BotPlayer, GameOutcome, Orchestrator};
use anyhow::Result;
use slide_tictactoe::{HeuristicBot, Player as Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Move cap used when none is given.
pub const DEFAULT_SELFPLAY_MAX_TURNS: u32 = 200;

/// Tally of a self-play run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display(
    "{} games: X won {}, O won {}, {} drawn, {} unfinished",
    games,
    x_wins,
    o_wins,
    draws,
    unfinished
)]
pub struct SelfPlaySummary {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Games drawn during placement.
    pub draws: u32,
    /// Games stopped by the move cap.
    pub unfinished: u32,
}

impl SelfPlaySummary {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Won { mark: Mark::X, .. } => self.x_wins += 1,
            GameOutcome::Won { mark: Mark::O, .. } => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Unfinished { .. } | GameOutcome::Quit { .. } => self.unfinished += 1,
        }
    }
}

/// Plays one bot-versus-bot game.
///
/// Each side gets its own random source, derived from `seed` when given.
#[instrument]
pub async fn play_one(seed: Option<u64>, max_turns: u32) -> Result<GameOutcome> {
    let (bot_x, bot_o) = match seed {
        Some(seed) => (
            HeuristicBot::seeded(seed),
            HeuristicBot::seeded(seed.wrapping_add(1)),
        ),
        None => (HeuristicBot::from_entropy(), HeuristicBot::from_entropy()),
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(BotPlayer::new("Bot X", bot_x)),
        Box::new(BotPlayer::new("Bot O", bot_o)),
        event_tx,
    )
    .with_max_turns(Some(max_turns));

    let outcome = orchestrator.run().await?;
    drop(event_rx);
    debug!(%outcome, "Self-play game finished");
    Ok(outcome)
}

/// Plays `games` games, calling `on_game` with each index and outcome.
#[instrument(skip(on_game))]
pub async fn run_selfplay(
    games: u32,
    seed: Option<u64>,
    max_turns: u32,
    mut on_game: impl FnMut(u32, &GameOutcome),
) -> Result<SelfPlaySummary> {
    let mut summary = SelfPlaySummary::default();
    for game in 0..games {
        // Two seeds per game, one per side.
        let game_seed = seed.map(|s| s.wrapping_add(u64::from(game) * 2));
        let outcome = play_one(game_seed, max_turns).await?;
        on_game(game + 1, &outcome);
        summary.record(&outcome);
    }
    info!(%summary, "Self-play complete");
    Ok(summary)
}
