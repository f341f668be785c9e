//! Heuristic board evaluation.
//!
//! Positive scores favor O, negative scores favor X. Each of the eight
//! lines contributes according to how many marks one player holds on it;
//! a line holding both players' marks is dead and contributes nothing.

use super::rules::{LINES, Line};
use super::{Board, Mark};

/// Contribution of a line holding 0, 1, 2 or 3 marks of a single player.
const LINE_WEIGHTS: [i32; 4] = [0, 1, 10, 100];

/// Sums the per-line contributions over all eight lines.
///
/// The scheme is symmetric: swapping every X and O negates the score.
pub fn score(board: &Board) -> i32 {
    LINES.iter().map(|line| line_score(board, line)).sum()
}

fn line_score(board: &Board, line: &Line) -> i32 {
    let (mut x, mut o) = (0, 0);
    for coord in line.coords() {
        match board.mark_at(coord) {
            Mark::X => x += 1,
            Mark::O => o += 1,
            Mark::Empty => {}
        }
    }

    match (x, o) {
        (0, o) => LINE_WEIGHTS[o],
        (x, 0) => -LINE_WEIGHTS[x],
        _ => 0,
    }
}
