//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, MoveError};
use super::invariants::{Invariant, SingleNewMark};
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Boards are plain values. [`Board::apply_move`] returns a fresh board and
/// never modifies `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of occupied squares, i.e. the number of moves played.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Empty squares in row-major scan order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Every board reachable by `player` marking one empty square, paired
    /// with the square that was marked. Same order as [`Board::legal_moves`].
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Position, Board)> {
        self.legal_moves()
            .map(move |pos| (pos, self.with_square(pos, Square::Occupied(player))))
    }

    /// Places `player`'s mark at `pos`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = self.with_square(pos, Square::Occupied(player));
        debug_assert!(
            SingleNewMark::holds(&(*self, next)),
            "{}",
            SingleNewMark::description()
        );
        Ok(next)
    }

    /// Coordinate form of [`Board::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside `0..3`, or
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self))]
    pub fn place(&self, row: usize, col: usize, player: Player) -> Result<Board, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.apply_move(pos, player)
    }

    /// Returns the player holding a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the game is over: a line is completed or the board is full.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    fn with_square(mut self, pos: Position, square: Square) -> Board {
        self.squares[pos.to_index()] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}|{}|{}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses boards written as in [`Board`]'s `Display` output.
    ///
    /// `X`/`O` (either case) are marks, `.`, `-` and `_` are empty squares;
    /// `|`, `/` and whitespace are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::InvalidSymbol(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|rest: Vec<Square>| BoardParseError::WrongLength(rest.len()))?;
        Ok(Self { squares })
    }
}
