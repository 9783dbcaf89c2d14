//! Human player reading moves from a line-oriented input.

use super::{Player, Turn};
use crate::console::input::{Command, parse_command};
use crate::console::orchestrator::GameEvent;
use anyhow::Result;
use slide_tictactoe::{Board, Player as Mark};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Human player typing coordinates, one move per line.
pub struct HumanPlayer<R> {
    name: String,
    mark: Mark,
    lines: Lines<R>,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a human player for `mark` reading from `reader`.
    pub fn new(name: impl Into<String>, mark: Mark, reader: R) -> Self {
        Self {
            name: name.into(),
            mark,
            lines: reader.lines(),
            event_tx: None,
        }
    }

    /// Reports malformed lines on `event_tx` instead of dropping them silently.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_turn(&mut self, board: &Board) -> Result<Turn> {
        while let Some(line) = self.lines.next_line().await? {
            match parse_command(&line, self.mark, board.phase()) {
                Ok(Command::Play(mv)) => {
                    debug!(player = %self.name, %mv, "Human entered move");
                    return Ok(Turn::Play(mv));
                }
                Ok(Command::Quit) => return Ok(Turn::Quit),
                Err(error) => {
                    debug!(player = %self.name, %error, "Unreadable input");
                    if let Some(tx) = &self.event_tx {
                        tx.send(GameEvent::InputRejected {
                            player: self.name.clone(),
                            error,
                            phase: board.phase(),
                        })?;
                    }
                }
            }
        }

        warn!(player = %self.name, "Input closed");
        Ok(Turn::Quit)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
