//! Game-theoretic value of a position.

use serde::{Deserialize, Serialize};
use strictly_board::{Board, Player};

/// Outcome under perfect play, from the perspective of the player to move.
///
/// Negating a score switches perspective to the other player, which is
/// exact in a zero-sum game: a win for one side is a loss for the other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[repr(i8)]
pub enum Score {
    /// The player to move loses.
    #[display("loss")]
    Loss = -1,
    /// Neither side can force a win.
    #[display("draw")]
    Draw = 0,
    /// The player to move wins.
    #[display("win")]
    Win = 1,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Scores a finished board for `player`.
    ///
    /// Only meaningful when `board.is_terminal()`; a board with no completed
    /// line scores as a draw.
    pub fn terminal(board: &Board, player: Player) -> Self {
        match board.winner() {
            Some(winner) if winner == player => Score::Win,
            Some(_) => Score::Loss,
            None => Score::Draw,
        }
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    fn neg(self) -> Self::Output {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Score::Loss < Score::Draw);
        assert!(Score::Draw < Score::Win);
    }

    #[test]
    fn test_negation_matches_value() {
        for score in [Score::Loss, Score::Draw, Score::Win] {
            assert_eq!((-score).value(), -score.value());
            assert_eq!(-(-score), score);
        }
    }

    #[test]
    fn test_values_are_unit_steps() {
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::Draw.value(), 0);
        assert_eq!(Score::Win.value(), 1);
    }

    #[test]
    fn test_terminal_scores_are_zero_sum() {
        let won: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(Score::terminal(&won, Player::X), Score::Win);
        assert_eq!(Score::terminal(&won, Player::O), Score::Loss);

        let drawn: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(Score::terminal(&drawn, Player::X), Score::Draw);
        assert_eq!(Score::terminal(&drawn, Player::O), Score::Draw);
    }
}
