//! Negamax search with alpha-beta pruning.
//!
//! The search always runs to terminal positions. Tic-tac-toe has at most
//! nine plies, so no depth limit or heuristic evaluation is needed.

use super::{Evaluation, Score, SearchStats};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strictly_board::{Board, Player, Position};
use tracing::{debug, instrument};

/// Window bound strictly outside the score range, standing in for infinity.
const BOUND: i8 = 2;

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Skip branches that cannot change the result (alpha-beta).
    pruning: bool,
}

impl SearchConfig {
    /// Whether alpha-beta cutoffs are enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Exhaustive tic-tac-toe solver.
///
/// Holds only configuration; every search starts from fresh counters, so one
/// solver can serve both sides of a game.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the given options.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the search options.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds the best move for `player` on `board`.
    ///
    /// Among equally scored moves the first in row-major order wins. On a
    /// terminal board the evaluation carries the final score and no move.
    #[instrument(skip(self), fields(board = %board, pruning = self.config.pruning))]
    pub fn find_best_move(&self, board: &Board, player: Player) -> Evaluation {
        let mut stats = SearchStats::default();
        let (best_move, score) = self.negamax(board, player, -BOUND, BOUND, &mut stats);

        debug!(
            ?best_move,
            %score,
            nodes = stats.nodes,
            terminal = stats.terminal_evaluations,
            cutoffs = stats.cutoffs,
            "Search complete"
        );
        Evaluation::new(best_move, score, stats)
    }

    /// Value of `board` for `player` to move.
    pub fn evaluate(&self, board: &Board, player: Player) -> Score {
        self.find_best_move(board, player).score()
    }

    /// Returns the best move and its score for `player`, searching children
    /// with the negated, swapped window `(-beta, -alpha)`.
    fn negamax(
        &self,
        board: &Board,
        player: Player,
        mut alpha: i8,
        beta: i8,
        stats: &mut SearchStats,
    ) -> (Option<Position>, Score) {
        stats.nodes += 1;

        if board.is_terminal() {
            stats.terminal_evaluations += 1;
            return (None, Score::terminal(board, player));
        }

        let mut best: Option<(Position, Score)> = None;

        for (pos, child) in board.successors(player) {
            let (_, reply) = self.negamax(&child, player.opponent(), -beta, -alpha, stats);
            let score = -reply;

            let best_score = match best {
                Some((_, kept)) if kept >= score => kept,
                _ => {
                    best = Some((pos, score));
                    score
                }
            };

            if self.config.pruning {
                alpha = alpha.max(best_score.value());
                if alpha >= beta {
                    stats.cutoffs += 1;
                    break;
                }
            }
        }

        match best {
            Some((pos, score)) => (Some(pos), score),
            None => unreachable!("non-terminal board has no empty square:\n{board}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_in_top_row() {
        let eval = Solver::default().find_best_move(&board("XX.|...|..."), Player::X);
        assert_eq!(eval.best_move(), Some(Position::TopRight));
        assert_eq!(eval.score(), Score::Win);
    }

    #[test]
    fn test_terminal_board_returns_no_move() {
        let solver = Solver::default();

        let won = board("XXX|OO.|...");
        let eval = solver.find_best_move(&won, Player::O);
        assert_eq!(eval.best_move(), None);
        assert_eq!(eval.score(), Score::Loss);
        assert_eq!(eval.stats().nodes, 1);
        assert_eq!(eval.stats().terminal_evaluations, 1);

        let drawn = board("XOX|OXX|OXO");
        assert_eq!(
            solver.find_best_move(&drawn, Player::X).score(),
            Score::Draw
        );
    }

    #[test]
    fn test_last_square_is_forced() {
        // Only the bottom-right square remains; X filling it completes the diagonal.
        let eval = Solver::default().find_best_move(&board("XOO|OXX|XO."), Player::X);
        assert_eq!(eval.best_move(), Some(Position::BottomRight));
        assert_eq!(eval.score(), Score::Win);
    }

    #[test]
    fn test_ties_go_to_first_square_scanned() {
        // Every opening move draws, so the scan order picks the corner.
        let eval = Solver::default().find_best_move(&Board::new(), Player::X);
        assert_eq!(eval.best_move(), Some(Position::TopLeft));
        assert_eq!(eval.score(), Score::Draw);
    }

    #[test]
    fn test_pruning_setter() {
        let config = SearchConfig::default().with_pruning(false);
        assert!(!config.pruning());
        assert!(!Solver::new(config).config().pruning());
    }
}
