//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be recorded, logged, and replayed.

use super::{Coordinate, Player};
use serde::Serialize;
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player marks.
    pub coord: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coordinate) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the coordinate is already marked.
    #[display("Cell {_0} is already marked")]
    CellOccupied(Coordinate),

    /// The coordinate lies outside the 3x3 grid.
    #[display("Coordinate ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// An undo targeted a cell with no mark.
    #[display("Cell {_0} has no mark to undo")]
    CellEmpty(Coordinate),

    /// A move was attributed to something other than X or O.
    #[display("{_0:?} is not a player (expected X or O)")]
    IllegalPlayer(String),

    /// Text could not be read as a coordinate or board.
    #[display("Could not parse input: {_0}")]
    Unparseable(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
