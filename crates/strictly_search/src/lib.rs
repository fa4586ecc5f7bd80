//! Exhaustive adversarial search for tic-tac-toe.
//!
//! [`Solver::find_best_move`] runs a full-depth negamax search with
//! alpha-beta pruning and reports the best move for the player to move,
//! its [`Score`] from that player's perspective, and search statistics.
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, Player, Position};
//! use strictly_search::{Score, Solver};
//!
//! let board: Board = "XX.|OO.|...".parse().unwrap();
//! let eval = Solver::default().find_best_move(&board, Player::X);
//!
//! assert_eq!(eval.best_move(), Some(Position::TopRight));
//! assert_eq!(eval.score(), Score::Win);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod evaluation;
mod score;
mod solver;

pub use evaluation::{Evaluation, SearchStats};
pub use score::Score;
pub use solver::{SearchConfig, Solver};
