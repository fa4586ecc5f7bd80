//! Strictly Solver - unified CLI
//!
//! Runs solver self-play or analyzes a single position.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_board::{BalancedMarks, Board, Invariant, Player};
use strictly_search::{SearchConfig, Solver};
use strictly_solver::{SelfPlay, SolverConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            first,
            no_pruning,
            json,
        } => run_play(config, first, no_pruning, json),
        Command::Analyze {
            board,
            player,
            no_pruning,
            json,
        } => run_analyze(board, player, no_pruning, json),
    }
}

/// Plays a full game with the solver on both sides.
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    first: Option<Player>,
    no_pruning: bool,
    json: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    }
    .with_overrides(first, no_pruning);

    info!(?config, "Starting self-play");
    let driver = SelfPlay::new(Solver::new(*config.search()));
    let record = driver.play_out(Board::new(), *config.first_player())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Current board:\n{}", record.start());
    for played in record.moves() {
        println!(
            "\n{}'s turn: {} ({})",
            played.player(),
            played.position(),
            played.score()
        );
        println!("{}", played.board());
    }
    println!("\nFinal board:\n{}", record.final_board());
    println!("\n{}", record.outcome());

    Ok(())
}

/// Prints the best move for `player` on `board`.
#[instrument]
fn run_analyze(board: Board, player: Player, no_pruning: bool, json: bool) -> Result<()> {
    if !BalancedMarks::holds(&board) {
        warn!(
            "{}: board is not reachable by alternating play",
            BalancedMarks::description()
        );
    }

    let solver = Solver::new(SearchConfig::default().with_pruning(!no_pruning));
    let eval = solver.find_best_move(&board, player);

    if json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
        return Ok(());
    }

    println!("{}\n", board);
    match eval.best_move() {
        Some(pos) => println!("Best move for {}: {}", player, pos),
        None => println!("Game is over, no move for {}", player),
    }
    println!("Score: {}", eval.score());
    println!("Search: {}", eval.stats());

    Ok(())
}
