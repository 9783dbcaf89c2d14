//! Sliding tic-tac-toe: rules engine and heuristic bot.
//!
//! Each player first places three pieces, then slides them one step at a
//! time until someone completes a line.
//!
//! # Architecture
//!
//! - **Board**: immutable snapshots; [`Board::apply`] validates a [`Move`]
//!   and returns the next board
//! - **Rules**: pure line, draw and adjacency checks shared by engine and bot
//! - **Contracts**: ordered preconditions and debug-build postconditions
//! - **Strategy**: the [`HeuristicBot`] rule cascades
//!
//! # Example
//!
//! ```
//! use slide_tictactoe::{Board, GameStatus, HeuristicBot, Move, Player, Strategy};
//!
//! let board = Board::new();
//! let board = board.apply(&Move::place(Player::X, (1, 1)))?;
//! assert_eq!(board.to_move(), Player::O);
//!
//! let mut bot = HeuristicBot::seeded(7);
//! let reply = bot.choose_move(&board)?;
//! let board = board.apply(&reply)?;
//! assert_eq!(board.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod invariants;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use action::{Move, MoveError, MoveKind};
pub use board::{Board, PIECES_PER_PLAYER};
pub use position::{Coord, Position};
pub use strategy::{HeuristicBot, MovementRule, PlacementRule, Strategy, StrategyError};
pub use types::{GamePhase, GameStatus, Player, Square};
