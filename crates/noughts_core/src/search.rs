//! Exhaustive minimax search.
//!
//! The search explores every legal continuation on a single board,
//! applying a candidate move, recursing, and undoing it before trying the
//! next one. O maximizes the [`score`](crate::score::score), X minimizes it.
//! There is no pruning: the full tree from an empty board has under a
//! million nodes.

use super::action::MoveError;
use super::rules::evaluate;
use super::score::score;
use super::{Board, Coordinate, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Depth that covers every remaining ply of a 3x3 game.
pub const DEFAULT_DEPTH: u8 = 9;

/// Result of a search: the chosen move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Best move for the searching player, or `None` when the root is a leaf
    /// (game already decided, or depth 0).
    pub best: Option<Coordinate>,
    /// Minimax score of the root (positive favors O).
    pub score: i32,
    /// Number of positions visited, root included.
    pub nodes: u64,
}

/// Finds the best move for `player` on `board`, looking `depth` plies ahead.
///
/// Candidates are tried in row-major order and ties keep the earliest one.
/// The board is borrowed exclusively for the whole search and is returned
/// exactly as it was handed in, turn included.
///
/// # Errors
///
/// Only fails if the board rejects one of the search's own apply/undo
/// steps, which indicates a corrupted board.
#[instrument(skip(board), fields(marked = board.marked_count()))]
pub fn best_move(board: &mut Board, player: Player, depth: u8) -> Result<SearchResult, MoveError> {
    #[cfg(debug_assertions)]
    let before = board.clone();
    let turn = board.turn();

    let mut nodes = 0;
    let (best, score) = minimax(board, player, depth, &mut nodes)?;
    board.set_turn(turn);

    #[cfg(debug_assertions)]
    debug_assert_eq!(before, *board, "search left the board mutated");

    debug!(?best, score, nodes, "Search complete");
    Ok(SearchResult { best, score, nodes })
}

fn minimax(
    board: &mut Board,
    player: Player,
    depth: u8,
    nodes: &mut u64,
) -> Result<(Option<Coordinate>, i32), MoveError> {
    *nodes += 1;

    if depth == 0 || !evaluate(board).is_ongoing() {
        return Ok((None, score(board)));
    }

    let candidates: Vec<Coordinate> = board.empty_cells().collect();
    let mut best = None;
    let mut best_score = match player {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };

    for coord in candidates {
        board.apply_move(coord, player)?;
        let (_, child) = minimax(board, player.opponent(), depth - 1, nodes)?;
        board.undo_move(coord)?;

        let improves = match player {
            Player::O => child > best_score,
            Player::X => child < best_score,
        };
        if improves {
            best_score = child;
            best = Some(coord);
        }
    }

    Ok((best, best_score))
}
