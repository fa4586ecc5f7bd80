//! Self-play driver: the solver plays both sides until the game ends.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_board::{Board, MoveError, Player, Position};
use strictly_search::{Score, Solver};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Reads the outcome off a terminal board.
    pub fn of(board: &Board) -> Self {
        match board.winner() {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "It's a draw"),
        }
    }
}

/// One move of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Player who moved.
    player: Player,
    /// Square that was marked.
    position: Position,
    /// Value of the position for `player` when the move was chosen.
    score: Score,
    /// Board after the move.
    board: Board,
}

/// Complete record of a self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    start: Board,
    /// Moves in the order they were played.
    moves: Vec<PlayedMove>,
    /// Board when the game ended.
    final_board: Board,
    /// Result of the game.
    outcome: Outcome,
}

/// Error raised when the solver's proposal cannot be played.
///
/// Either case indicates a defect; the search only proposes empty squares
/// on live boards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SelfPlayError {
    /// The proposed square was rejected by the board.
    #[display("Solver proposed an illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// The solver produced no move for a board that is still in play.
    #[display("Solver returned no move for a live board:\n{}", _0)]
    NoMove(Board),
}

impl std::error::Error for SelfPlayError {}

impl From<MoveError> for SelfPlayError {
    fn from(err: MoveError) -> Self {
        SelfPlayError::IllegalMove(err)
    }
}

/// Plays the solver against itself.
#[derive(Debug, Clone, Default)]
pub struct SelfPlay {
    solver: Solver,
}

impl SelfPlay {
    /// Creates a driver around `solver`.
    pub fn new(solver: Solver) -> Self {
        Self { solver }
    }

    /// Plays from `start` with `first_player` to move until the board is
    /// terminal. A terminal `start` yields a record with no moves.
    ///
    /// # Errors
    ///
    /// Returns [`SelfPlayError`] if the solver proposes a move that cannot
    /// be applied.
    #[instrument(skip(self), fields(start = %start))]
    pub fn play_out(
        &self,
        start: Board,
        first_player: Player,
    ) -> Result<GameRecord, SelfPlayError> {
        let mut board = start;
        let mut to_move = first_player;
        let mut moves = Vec::new();

        while !board.is_terminal() {
            let eval = self.solver.find_best_move(&board, to_move);
            let position = eval.best_move().ok_or(SelfPlayError::NoMove(board))?;

            board = board.apply_move(position, to_move)?;
            info!(player = %to_move, %position, score = %eval.score(), "Move played");
            debug!(stats = %eval.stats(), "\n{}", board);

            moves.push(PlayedMove {
                player: to_move,
                position,
                score: eval.score(),
                board,
            });
            to_move = to_move.opponent();
        }

        let outcome = Outcome::of(&board);
        info!(%outcome, moves = moves.len(), "Game over");

        Ok(GameRecord {
            start,
            moves,
            final_board: board,
            outcome,
        })
    }
}
