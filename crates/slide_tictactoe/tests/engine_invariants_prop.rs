//! Property tests over random legal games.
//!
//! Invariants covered:
//! - `apply` never changes the receiver.
//! - Placement passes the turn except on the quota-completing placement.
//! - Movement is entered once and never left.
//! - Movement keeps six occupied squares.
//! - Every listed movement move applies cleanly.

use proptest::prelude::*;
use proptest::sample::Index;
use slide_tictactoe::{Board, GamePhase, Move, PIECES_PER_PLAYER, Player};

fn legal_moves(board: &Board) -> Vec<Move> {
    let player = board.to_move();
    match board.phase() {
        GamePhase::Placement => board
            .empty_squares()
            .map(|pos| Move::place(player, pos))
            .collect(),
        GamePhase::Movement => board.valid_movement_moves(player).collect(),
    }
}

proptest! {
    #[test]
    fn random_games_hold_invariants(choices in prop::collection::vec(any::<Index>(), 0..80)) {
        let mut board = Board::new();
        let mut entered_movement = false;

        for choice in choices {
            if board.status().is_over() {
                break;
            }
            let moves = legal_moves(&board);
            prop_assert!(!moves.is_empty());
            let mv = *choice.get(&moves);

            let snapshot = board.clone();
            let next = board.apply(&mv).expect("listed move is legal");
            prop_assert_eq!(&board, &snapshot);

            match board.phase() {
                GamePhase::Placement => {
                    let done = next.pieces_placed(Player::X) == PIECES_PER_PLAYER
                        && next.pieces_placed(Player::O) == PIECES_PER_PLAYER;
                    if done {
                        prop_assert_eq!(next.phase(), GamePhase::Movement);
                        prop_assert_eq!(next.to_move(), board.to_move());
                    } else {
                        prop_assert_eq!(next.phase(), GamePhase::Placement);
                        prop_assert_eq!(next.to_move(), board.to_move().opponent());
                    }
                    prop_assert_eq!(next.occupied_count(), board.occupied_count() + 1);
                }
                GamePhase::Movement => {
                    entered_movement = true;
                    prop_assert_eq!(next.phase(), GamePhase::Movement);
                    prop_assert_eq!(next.occupied_count(), 6);
                    prop_assert_eq!(next.to_move(), board.to_move().opponent());
                }
            }
            if entered_movement {
                prop_assert_eq!(next.phase(), GamePhase::Movement);
            }
            board = next;
        }
    }

    #[test]
    fn movement_moves_are_symmetric_steps(choices in prop::collection::vec(any::<Index>(), 6..40)) {
        let mut board = Board::new();
        for choice in choices {
            if board.status().is_over() {
                break;
            }
            let moves = legal_moves(&board);
            let mv = *choice.get(&moves);
            if board.phase() == GamePhase::Movement {
                let from = mv.source_position().expect("source");
                let to = mv.target_position().expect("target");
                prop_assert!(slide_tictactoe::rules::is_adjacent(to, from));
            }
            board = board.apply(&mv).expect("listed move is legal");
        }
    }
}
