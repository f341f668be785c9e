//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.marked_count() == 9
}
