//! Search results.

use super::Score;
use serde::{Deserialize, Serialize};
use strictly_board::Position;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    /// Terminal positions scored.
    pub terminal_evaluations: u64,
    /// Move loops abandoned because `alpha >= beta`.
    pub cutoffs: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal, {} cutoffs",
            self.nodes, self.terminal_evaluations, self.cutoffs
        )
    }
}

/// Best move and value of a searched position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Evaluation {
    best_move: Option<Position>,
    score: Score,
    stats: SearchStats,
}

impl Evaluation {
    /// The move to play, or `None` when the searched board was already
    /// terminal and only a score could be produced.
    pub fn best_move(&self) -> Option<Position> {
        self.best_move
    }

    /// Value of the position for the player that was searched.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Counters from the search that produced this evaluation.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best_move {
            Some(pos) => write!(f, "{} ({})", pos, self.score),
            None => write!(f, "game over ({})", self.score),
        }
    }
}
