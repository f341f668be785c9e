//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{DEFAULT_DEPTH, Player};

/// Noughts - tic-tac-toe against a perfect minimax engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML config file (engine, depth)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side the engine plays (X or O); overrides the config file
        #[arg(short, long)]
        engine: Option<Player>,

        /// Search depth in plies; overrides the config file
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=9))]
        depth: Option<u8>,
    },

    /// Let the engine play itself from an empty board
    Selfplay {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..=9))]
        depth: u8,
    },

    /// Print the best move for a board as JSON
    BestMove {
        /// Board as nine cells, e.g. "XX.|.O.|..."
        #[arg(short, long)]
        board: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(short, long)]
        player: Option<Player>,

        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(0..=9))]
        depth: u8,
    },
}
