//! Noughts - unified CLI
//!
//! Interactive play, engine self-play and one-shot best-move queries.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameConfig, run_best_move, run_play, run_selfplay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may live there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            engine,
            depth,
        } => play(config, engine, depth),
        Command::Selfplay { depth } => {
            run_selfplay(depth, std::io::stdout().lock())?;
            Ok(())
        }
        Command::BestMove {
            board,
            player,
            depth,
        } => {
            run_best_move(&board, player, depth, std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn play(
    config: Option<std::path::PathBuf>,
    engine: Option<noughts_core::Player>,
    depth: Option<u8>,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(engine, depth);
    info!(?config, "Starting interactive game");

    run_play(&config, std::io::stdin().lock(), std::io::stdout().lock())
}
