//! Noughts core - tic-tac-toe rules and an exhaustive minimax engine
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of marks plus the side to move, with move
//!   application and undo
//! - **Rules**: the single terminal check ([`evaluate`]) returning
//!   [`Outcome`] with the winning line
//! - **Score**: symmetric line-based heuristic, positive for O
//! - **Search**: full-depth minimax over one board using apply/undo
//! - **Session**: a human-versus-engine game built on the above
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Coordinate, Player, best_move, DEFAULT_DEPTH};
//!
//! # fn main() -> Result<(), noughts_core::MoveError> {
//! let mut board = Board::new();
//! board.apply_move(Coordinate::new(0, 0)?, Player::X)?;
//!
//! let result = best_move(&mut board, Player::O, DEFAULT_DEPTH)?;
//! assert_eq!(result.best, Some(Coordinate::new(1, 1)?));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod rules;
mod score;
mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use coordinate::Coordinate;
pub use rules::{LINES, Line, Outcome, evaluate, is_full, winning_line};
pub use score::score;
pub use search::{DEFAULT_DEPTH, SearchResult, best_move};
pub use session::{Reply, Session};
pub use types::{Board, Cell, Mark, Player};
