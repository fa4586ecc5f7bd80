//! Immutable tic-tac-toe board model.
//!
//! A [`Board`] is a `Copy` value: placing a mark produces a new board and
//! leaves the original untouched, so any number of positions can be held
//! on a search stack at once without aliasing concerns.
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, Player, Position};
//!
//! let board = Board::new();
//! let next = board.apply_move(Position::Center, Player::X).unwrap();
//!
//! assert!(board.get(Position::Center).is_empty());
//! assert_eq!(next.legal_moves().count(), 8);
//! assert!(!next.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::{BoardParseError, MoveError};
pub use invariants::{BalancedMarks, Invariant, SingleNewMark};
pub use position::Position;
pub use types::{Board, Player, Square};
