//! Game rules for sliding tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the engine and the bot
//! share one definition of lines and adjacency.

pub mod adjacency;
pub mod draw;
pub mod win;

pub use adjacency::{FORBIDDEN_DIAGONALS, is_adjacent};
pub use draw::is_full;
pub use win::{LINES, Line, check_winner, completes_line, would_complete};
