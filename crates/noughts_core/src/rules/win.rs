//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::{LINES, Line};

/// Finds the first line, in [`LINES`] order, uniformly marked by one player.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.coords();
        let owner = board.cell_at(a).owner()?;
        let mark = board.mark_at(a);
        (mark == board.mark_at(b) && mark == board.mark_at(c)).then_some((owner, *line))
    })
}
