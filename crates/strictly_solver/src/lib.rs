//! Driver for the tic-tac-toe solver.
//!
//! Plays the solver against itself from any position and records the game,
//! with options loaded from a TOML file.
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, Player};
//! use strictly_solver::{Outcome, SelfPlay};
//!
//! let record = SelfPlay::default().play_out(Board::new(), Player::X).unwrap();
//! assert_eq!(record.outcome(), &Outcome::Draw);
//! assert_eq!(record.moves().len(), 9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod self_play;

pub use config::{ConfigError, SolverConfig};
pub use self_play::{GameRecord, Outcome, PlayedMove, SelfPlay, SelfPlayError};
