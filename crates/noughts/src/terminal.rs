//! Line-oriented terminal front end.
//!
//! All loops are generic over their reader and writer so they run the same
//! against a real terminal and against in-memory buffers.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use noughts_core::{Board, Coordinate, Outcome, Player, SearchResult, Session, best_move, evaluate};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Plays interactive games against the engine until `quit` or end of input.
///
/// Besides moves (`1`-`9` or `row,col`), the loop understands `restart`
/// and `quit`. Rejected moves are reported and the prompt repeats.
#[instrument(skip_all, fields(engine = %config.engine(), depth = config.depth()))]
pub fn run_play<R: BufRead, W: Write>(config: &GameConfig, input: R, mut output: W) -> Result<()> {
    let mut session = Session::new(*config.engine(), *config.depth())?;
    info!("Game started");

    writeln!(output, "You play {}. Enter 1-9 or row,col; 'restart' or 'quit'.", session.human())?;
    announce_opening(&session, &mut output)?;
    show(&session, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "restart" => {
                session.reset()?;
                writeln!(output, "New game.")?;
                announce_opening(&session, &mut output)?;
            }
            text => match text.parse::<Coordinate>().and_then(|coord| session.play(coord)) {
                Ok(reply) => {
                    if let Some(mov) = reply.engine_move {
                        writeln!(output, "Engine plays {}", mov.coord)?;
                    }
                }
                Err(e) => {
                    warn!(input = text, error = %e, "Move rejected");
                    writeln!(output, "{e}")?;
                }
            },
        }

        show(&session, &mut output)?;
    }

    debug!(moves = session.history().len(), "Leaving play loop");
    Ok(())
}

fn announce_opening<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    if let Some(mov) = session.history().first() {
        writeln!(output, "Engine opens at {}", mov.coord)?;
    }
    Ok(())
}

fn show<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    writeln!(output, "\n{}\n", session.board())?;
    match session.outcome() {
        Outcome::Ongoing => write!(output, "Your move ({}): ", session.human())?,
        outcome => writeln!(output, "{outcome}. Type 'restart' to play again or 'quit'.")?,
    }
    output.flush()?;
    Ok(())
}

/// Lets the engine play both sides from an empty board.
///
/// Prints every ply and returns the final outcome.
#[instrument(skip(output))]
pub fn run_selfplay<W: Write>(depth: u8, mut output: W) -> Result<Outcome> {
    let mut board = Board::new();
    let depth = depth.max(1);

    loop {
        let outcome = evaluate(&board);
        if !outcome.is_ongoing() {
            writeln!(output, "{outcome}")?;
            info!(%outcome, "Self-play finished");
            return Ok(outcome);
        }

        let player = board.turn();
        let result = best_move(&mut board, player, depth)?;
        let coord = result
            .best
            .context("Search returned no move for an open board")?;
        board.apply_move(coord, player)?;

        writeln!(output, "{player} -> {coord} (score {}, {} nodes)", result.score, result.nodes)?;
        writeln!(output, "{board}\n")?;
    }
}

/// Searches a board given as text and prints the result as JSON.
///
/// The side to move defaults to the one implied by the mark counts.
#[instrument(skip(output))]
pub fn run_best_move<W: Write>(
    board: &str,
    player: Option<Player>,
    depth: u8,
    mut output: W,
) -> Result<SearchResult> {
    let mut board: Board = board.parse().context("Invalid board")?;
    let player = player.unwrap_or_else(|| board.turn());
    let outcome = evaluate(&board);
    if !outcome.is_ongoing() {
        warn!(%outcome, "Board is already decided; reporting its score only");
    }

    let result = best_move(&mut board, player, depth)?;
    let report = serde_json::json!({
        "player": player,
        "outcome": outcome,
        "best": result.best,
        "score": result.score,
        "nodes": result.nodes,
    });
    writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(result)
}
