//! Property tests over boards reachable by alternating play.

use proptest::prelude::*;
use strictly_board::{
    BalancedMarks, Board, Invariant, MoveError, Player, Position, SingleNewMark, rules,
};

/// Plays `picks` as indices into the legal move list, alternating from X,
/// stopping early when the game ends.
fn play(picks: &[usize]) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = Player::X;
    for pick in picks {
        if board.is_terminal() {
            break;
        }
        let moves: Vec<_> = board.legal_moves().collect();
        let pos = moves[pick % moves.len()];
        board = board.apply_move(pos, to_move).expect("legal move");
        to_move = to_move.opponent();
    }
    (board, to_move)
}

fn move_picks() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..10)
}

proptest! {
    #[test]
    fn winner_implies_terminal(picks in move_picks()) {
        let (board, _) = play(&picks);
        if board.winner().is_some() {
            prop_assert!(board.is_terminal());
        }
        if rules::is_full(&board) {
            prop_assert!(board.is_terminal());
        }
        if board.is_terminal() {
            prop_assert!(board.winner().is_some() || rules::is_draw(&board));
        }
    }

    #[test]
    fn apply_move_leaves_input_untouched(picks in move_picks()) {
        let (board, to_move) = play(&picks);
        let snapshot = board;
        for pos in Position::ALL {
            let result = board.apply_move(pos, to_move);
            prop_assert_eq!(board, snapshot);
            match result {
                Ok(next) => {
                    prop_assert!(snapshot.is_empty(pos));
                    prop_assert!(SingleNewMark::holds(&(snapshot, next)));
                }
                Err(err) => {
                    prop_assert_eq!(err, MoveError::SquareOccupied(pos));
                }
            }
        }
    }

    #[test]
    fn alternating_play_keeps_marks_balanced(picks in move_picks()) {
        let (board, to_move) = play(&picks);
        prop_assert!(BalancedMarks::holds(&board));
        prop_assert_eq!(board.occupied_count(), board.count(Player::X) + board.count(Player::O));
        // X moves first, so X is never behind.
        let expected = if board.occupied_count() % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(to_move, expected);
    }

    #[test]
    fn display_output_parses_back(picks in move_picks()) {
        let (board, _) = play(&picks);
        let parsed: Board = board.to_string().parse().expect("display output parses");
        prop_assert_eq!(parsed, board);
    }
}

#[test]
fn test_full_draw_has_no_winner() {
    let board: Board = "XXO|OOX|XOX".parse().unwrap();
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.legal_moves().count(), 0);
}

#[test]
fn test_place_matches_apply_move() {
    let board = Board::new();
    assert_eq!(
        board.place(0, 2, Player::O),
        board.apply_move(Position::TopRight, Player::O)
    );
}
