//! Game orchestration between players.

use super::input::InputError;
use super::players::{Player, Turn};
use anyhow::{Result, bail};
use slide_tictactoe::{Board, GamePhase, GameStatus, Move, MoveError, Player as Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameOutcome {
    /// A player completed a line.
    #[display("{} ({}) wins", name, mark)]
    Won {
        /// Winning mark.
        mark: Mark,
        /// Winner's display name.
        name: String,
    },

    /// The board filled during placement without a line.
    #[display("Draw")]
    Draw,

    /// A player left the game.
    #[display("{} ({}) quit", name, mark)]
    Quit {
        /// Mark of the player who left.
        mark: Mark,
        /// Their display name.
        name: String,
    },

    /// The move cap was reached with the game still open.
    #[display("Unfinished after {} moves", turns)]
    Unfinished {
        /// Moves applied.
        turns: u32,
    },
}

impl GameOutcome {
    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player is about to take a turn.
    TurnStarted {
        /// Display name.
        player: String,
        /// Mark on turn.
        mark: Mark,
        /// Whether the player types its moves.
        interactive: bool,
        /// Board the player moves on.
        board: Board,
    },

    /// A move was applied.
    MovePlayed {
        /// Display name.
        player: String,
        /// Applied move.
        mv: Move,
    },

    /// The engine refused a move from an interactive player.
    MoveRejected {
        /// Display name.
        player: String,
        /// Why the move was refused.
        error: MoveError,
    },

    /// A typed line could not be read as a move.
    InputRejected {
        /// Display name.
        player: String,
        /// What was wrong with the line.
        error: InputError,
        /// Phase the line was entered in.
        phase: GamePhase,
    },

    /// All pieces are on the board.
    PhaseChanged(GamePhase),

    /// Game ended.
    GameOver {
        /// Result.
        outcome: GameOutcome,
        /// Final board.
        board: Board,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    max_turns: Option<u32>,
}

impl Orchestrator {
    /// Creates a new orchestrator. X moves first.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            event_tx,
            max_turns: None,
        }
    }

    /// Ends the game as unfinished after `max_turns` applied moves.
    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until it ends.
    ///
    /// # Errors
    ///
    /// Fails when a player errors, a non-interactive player submits an
    /// illegal move, the engine reports an internal fault, or the event
    /// receiver is gone.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game orchestration");
        let mut turns: u32 = 0;

        loop {
            let outcome = match self.board.status() {
                GameStatus::Won(mark) => Some(GameOutcome::Won {
                    mark,
                    name: self.player(mark).name().to_string(),
                }),
                GameStatus::Draw => Some(GameOutcome::Draw),
                GameStatus::InProgress => match self.max_turns {
                    Some(max) if turns >= max => Some(GameOutcome::Unfinished { turns }),
                    _ => None,
                },
            };
            if let Some(outcome) = outcome {
                return self.finish(outcome);
            }

            let mark = self.board.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            self.event_tx.send(GameEvent::TurnStarted {
                player: name.clone(),
                mark,
                interactive: player.is_interactive(),
                board: self.board.clone(),
            })?;

            debug!(player = %name, %mark, "Waiting for move");
            let mv = match player.next_turn(&self.board).await? {
                Turn::Play(mv) => mv,
                Turn::Quit => return self.finish(GameOutcome::Quit { mark, name }),
            };

            match self.board.apply(&mv) {
                Ok(next) => {
                    let phase_before = self.board.phase();
                    self.board = next;
                    turns += 1;
                    self.event_tx.send(GameEvent::MovePlayed { player: name, mv })?;
                    if self.board.phase() != phase_before {
                        info!(phase = %self.board.phase(), "Phase changed");
                        self.event_tx
                            .send(GameEvent::PhaseChanged(self.board.phase()))?;
                    }
                }
                Err(error) if error.is_validation() && player.is_interactive() => {
                    debug!(player = %name, %error, "Move rejected, asking again");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: name,
                        error,
                    })?;
                }
                Err(error) => {
                    warn!(player = %name, %mv, %error, "Unrecoverable move");
                    bail!("{} played {}: {}", name, mv, error);
                }
            }
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    fn finish(&self, outcome: GameOutcome) -> Result<GameOutcome> {
        info!(%outcome, "Game over");
        self.event_tx.send(GameEvent::GameOver {
            outcome: outcome.clone(),
            board: self.board.clone(),
        })?;
        Ok(outcome)
    }
}
