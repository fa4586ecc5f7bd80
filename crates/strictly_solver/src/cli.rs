//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_board::{Board, Player};

/// Strictly Solver - perfect-play tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Solve tic-tac-toe with negamax and alpha-beta pruning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the solver play both sides from the empty board
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player who moves first (X or O), overriding the config
        #[arg(long)]
        first: Option<Player>,

        /// Search the full tree without alpha-beta cutoffs
        #[arg(long)]
        no_pruning: bool,

        /// Print the game record as JSON instead of boards
        #[arg(long)]
        json: bool,
    },

    /// Find the best move for one position
    Analyze {
        /// Board text, e.g. "XX.|.O.|..." (X, O, and . for empty)
        #[arg(short, long)]
        board: Board,

        /// Player to move (X or O)
        #[arg(short, long)]
        player: Player,

        /// Search the full tree without alpha-beta cutoffs
        #[arg(long)]
        no_pruning: bool,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}
