//! Noughts - play tic-tac-toe against an exhaustive minimax engine
//!
//! This crate holds the terminal front end around [`noughts_core`]:
//! configuration loading and the interactive, self-play and one-shot
//! query loops. The binary wires them to the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod terminal;

pub use config::{ConfigError, GameConfig};
pub use terminal::{run_best_move, run_play, run_selfplay};
