//! Slide Games - sliding tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use slide_games::cli::{Cli, Command};
use slide_games::{
    BotPlayer, GameConfig, HumanPlayer, Orchestrator, Player, render_events, run_selfplay,
};
use slide_tictactoe::{HeuristicBot, Player as Mark};
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            human,
            seed,
            delay_ms,
            max_turns,
        } => run_play(config, human, seed, delay_ms, max_turns).await,
        Command::Selfplay {
            games,
            seed,
            max_turns,
        } => {
            let summary = run_selfplay(games, seed, max_turns, |game, outcome| {
                println!("Game {}: {}", game, outcome);
            })
            .await?;
            println!("{}", summary);
            Ok(())
        }
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,slide_games=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run a console game against the bot
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    human: Option<Mark>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    max_turns: Option<u32>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(mark) = human {
        config = config.with_human_mark(mark);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = delay_ms {
        config = config.with_bot_delay_ms(ms);
    }
    if let Some(max) = max_turns {
        config = config.with_max_turns(max);
    }

    let strategy = match config.seed() {
        Some(seed) => HeuristicBot::seeded(*seed),
        None => HeuristicBot::from_entropy(),
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, std::io::stdout()));

    let human_player: Box<dyn Player> = Box::new(
        HumanPlayer::new(
            config.human_name().clone(),
            *config.human_mark(),
            BufReader::new(tokio::io::stdin()),
        )
        .with_events(event_tx.clone()),
    );
    let bot_player: Box<dyn Player> = Box::new(
        BotPlayer::new(config.bot_name().clone(), strategy).with_delay(config.bot_delay()),
    );

    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (human_player, bot_player),
        Mark::O => (bot_player, human_player),
    };

    info!(human = %config.human_mark(), "Starting console game");
    let mut orchestrator =
        Orchestrator::new(player_x, player_o, event_tx).with_max_turns(*config.max_turns());
    let outcome = orchestrator.run().await;

    // Closing every sender lets the renderer drain and stop.
    drop(orchestrator);
    renderer.await??;
    outcome.map(|_| ())
}
