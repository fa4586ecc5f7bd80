//! First-class invariants over boards.
//!
//! Invariants are logical properties that must hold throughout play. They
//! are checked in debug builds and can be tested independently.

use super::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: under alternating play the two mark counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: a transition marks exactly one previously empty square.
///
/// Checked on a `(before, after)` pair. Every other square must be equal,
/// so squares are never overwritten or cleared.
pub struct SingleNewMark;

impl Invariant<(Board, Board)> for SingleNewMark {
    fn holds((before, after): &(Board, Board)) -> bool {
        let mut changed = 0;
        for (old, new) in before.squares().iter().zip(after.squares()) {
            if old != new {
                if !old.is_empty() || new.is_empty() {
                    return false;
                }
                changed += 1;
            }
        }
        changed == 1
    }

    fn description() -> &'static str {
        "Exactly one empty square becomes occupied per move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_balanced() {
        assert!(BalancedMarks::holds(&Board::new()));
    }

    #[test]
    fn test_two_ahead_unbalanced() {
        let board: Board = "XX.|...|...".parse().unwrap();
        assert!(!BalancedMarks::holds(&board));
    }

    #[test]
    fn test_single_move_holds() {
        let before = Board::new();
        let after = before.apply_move(Position::Center, Player::X).unwrap();
        assert!(SingleNewMark::holds(&(before, after)));
    }

    #[test]
    fn test_no_change_fails() {
        let board = Board::new();
        assert!(!SingleNewMark::holds(&(board, board)));
    }

    #[test]
    fn test_overwrite_fails() {
        let before: Board = "X........".parse().unwrap();
        let after: Board = "O........".parse().unwrap();
        assert!(!SingleNewMark::holds(&(before, after)));
    }

    #[test]
    fn test_two_marks_fail() {
        let before = Board::new();
        let after: Board = "XO.......".parse().unwrap();
        assert!(!SingleNewMark::holds(&(before, after)));
    }
}
