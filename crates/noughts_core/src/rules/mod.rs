//! Terminal-outcome detection for tic-tac-toe.
//!
//! [`evaluate`] is the one canonical terminal check. Search, the session
//! orchestrator and the command line all go through it.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use super::{Board, Coordinate, Player};
use serde::Serialize;

/// One of the eight coordinate triples that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Coordinate; 3]);

impl Line {
    /// The three coordinates of the line.
    pub fn coords(&self) -> [Coordinate; 3] {
        self.0
    }
}

/// All winning lines: rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Coordinate::at(0, 0), Coordinate::at(0, 1), Coordinate::at(0, 2)]),
    Line([Coordinate::at(1, 0), Coordinate::at(1, 1), Coordinate::at(1, 2)]),
    Line([Coordinate::at(2, 0), Coordinate::at(2, 1), Coordinate::at(2, 2)]),
    // Columns
    Line([Coordinate::at(0, 0), Coordinate::at(1, 0), Coordinate::at(2, 0)]),
    Line([Coordinate::at(0, 1), Coordinate::at(1, 1), Coordinate::at(2, 1)]),
    Line([Coordinate::at(0, 2), Coordinate::at(1, 2), Coordinate::at(2, 2)]),
    // Diagonals
    Line([Coordinate::at(0, 0), Coordinate::at(1, 1), Coordinate::at(2, 2)]),
    Line([Coordinate::at(0, 2), Coordinate::at(1, 1), Coordinate::at(2, 0)]),
];

/// Status of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    Ongoing,
    /// Board is full with no winning line.
    Draw,
    /// A player has marked a whole line.
    Win {
        /// The winner.
        player: Player,
        /// The first completed line in enumeration order.
        line: Line,
    },
}

impl Outcome {
    /// Returns true while the game can continue.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win { player, line } => {
                let [a, b, c] = line.coords();
                write!(f, "Player {player} wins along {a} {b} {c}")
            }
        }
    }
}

/// Decides whether `board` is won, drawn, or still in play.
///
/// Every line is examined on every call; nothing about the last move is
/// assumed. With more than one completed line (impossible under alternating
/// play) the first in [`LINES`] order is reported.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::Ongoing
}
