//! Human-versus-engine game session.
//!
//! A session owns the live board. The human submits a move; the session
//! validates it, applies it, evaluates the outcome once, and if the game is
//! still open lets the engine answer with a full-depth search.

use super::action::{Move, MoveError};
use super::rules::{Outcome, evaluate};
use super::search::best_move;
use super::{Board, Coordinate, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// What happened in response to a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// The engine's answer, absent when the human's move ended the game.
    pub engine_move: Option<Move>,
    /// Outcome after all moves of this exchange.
    pub outcome: Outcome,
}

/// A game between a human and the minimax engine.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    engine: Player,
    depth: u8,
    outcome: Outcome,
    history: Vec<Move>,
}

// ─────────────────────────────────────────────────────────────
//  Lifecycle
// ─────────────────────────────────────────────────────────────

impl Session {
    /// Creates a session with the engine playing `engine`.
    ///
    /// A `depth` of 0 would leave the engine without a move, so it is raised
    /// to 1. When the engine plays X it makes the opening move right away.
    #[instrument]
    pub fn new(engine: Player, depth: u8) -> Result<Self, MoveError> {
        let mut session = Self {
            board: Board::new(),
            engine,
            depth: depth.max(1),
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        };
        session.start()?;
        Ok(session)
    }

    /// Clears the board and history; the engine opens again if it plays X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Option<Move>, MoveError> {
        self.board.reset();
        self.history.clear();
        self.outcome = Outcome::Ongoing;
        info!("Session reset");
        self.start()
    }

    fn start(&mut self) -> Result<Option<Move>, MoveError> {
        if self.board.turn() == self.engine {
            return self.engine_turn().map(Some);
        }
        Ok(None)
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl Session {
    /// Plays the human's move at `coord` and, if the game goes on, the
    /// engine's reply.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::WrongPlayer`] if the human is not on turn.
    /// - [`MoveError::CellOccupied`] if the cell is taken.
    ///
    /// The session is unchanged when an error is returned.
    #[instrument(skip(self), fields(human = %self.human()))]
    pub fn play(&mut self, coord: Coordinate) -> Result<Reply, MoveError> {
        if !self.outcome.is_ongoing() {
            warn!("Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        let human = self.human();
        if self.board.turn() != human {
            warn!(turn = %self.board.turn(), "Move rejected: not the human's turn");
            return Err(MoveError::WrongPlayer(human));
        }

        self.place(Move::new(human, coord))?;

        let engine_move = if self.outcome.is_ongoing() {
            Some(self.engine_turn()?)
        } else {
            None
        };

        Ok(Reply {
            engine_move,
            outcome: self.outcome,
        })
    }

    fn engine_turn(&mut self) -> Result<Move, MoveError> {
        let result = best_move(&mut self.board, self.engine, self.depth)?;
        let coord = result.best.ok_or(MoveError::GameOver)?;
        debug!(%coord, score = result.score, nodes = result.nodes, "Engine chose move");

        let mov = Move::new(self.engine, coord);
        self.place(mov)?;
        Ok(mov)
    }

    /// Applies a validated move and re-evaluates the outcome once.
    fn place(&mut self, mov: Move) -> Result<(), MoveError> {
        self.board.apply_move(mov.coord, mov.player)?;
        self.history.push(mov);
        self.outcome = evaluate(&self.board);
        debug_assert!(self.history_consistent(), "history does not match board");

        info!(%mov, outcome = %self.outcome, "Move played");
        Ok(())
    }

    /// Replaying the history onto an empty board must give the live board.
    fn history_consistent(&self) -> bool {
        let mut replayed = Board::new();
        for mov in &self.history {
            if replayed.apply_move(mov.coord, mov.player).is_err() {
                return false;
            }
        }
        replayed == self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Session {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The side the engine plays.
    pub fn engine(&self) -> Player {
        self.engine
    }

    /// The side the human plays.
    pub fn human(&self) -> Player {
        self.engine.opponent()
    }

    /// Search depth used for engine moves.
    pub fn depth(&self) -> u8 {
        self.depth
    }
}
