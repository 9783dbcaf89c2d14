//! Text rendering of game events.

use super::input::usage;
use super::orchestrator::GameEvent;
use anyhow::Result;
use slide_tictactoe::GamePhase;
use std::io::Write;
use tokio::sync::mpsc;

/// Formats one event for the console.
///
/// Prompts for interactive players end without a newline so the cursor
/// stays on the prompt line.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::TurnStarted {
            player,
            mark,
            interactive: true,
            board,
        } => format!(
            "\n{}\n{} ({}), enter {} or 'q' to quit: ",
            board,
            player,
            mark,
            usage(board.phase())
        ),
        GameEvent::TurnStarted {
            player,
            mark,
            interactive: false,
            board,
        } => format!("\n{}\n{} ({}) is thinking...\n", board, player, mark),
        GameEvent::MovePlayed { player, mv } => format!("{} played {}\n", player, mv),
        GameEvent::MoveRejected { error, .. } => format!("Illegal move: {}. Try again: ", error),
        GameEvent::InputRejected { error, phase, .. } => {
            format!("{}. Enter {}: ", error, usage(*phase))
        }
        GameEvent::PhaseChanged(GamePhase::Movement) => {
            "All pieces are down. Slide one piece to an adjacent empty square each turn.\n"
                .to_string()
        }
        GameEvent::PhaseChanged(phase) => format!("{} phase\n", phase),
        GameEvent::GameOver { outcome, board } => format!("\n{}\n{}\n", board, outcome),
    }
}

/// Prints events until the sender side closes.
pub async fn render_events<W: Write>(
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    mut out: W,
) -> Result<()> {
    while let Some(event) = event_rx.recv().await {
        write!(out, "{}", describe(&event))?;
        out.flush()?;
    }
    Ok(())
}
