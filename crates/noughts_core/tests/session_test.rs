//! Tests for human-versus-engine sessions.

use noughts_core::{Coordinate, DEFAULT_DEPTH, MoveError, Outcome, Player, Session};
use strum::IntoEnumIterator;

/// Tries every human move sequence against the engine, counting finished
/// games and the ones the human won.
fn explore(session: &Session, engine_losses: &mut usize, games: &mut usize) {
    if !session.outcome().is_ongoing() {
        *games += 1;
        if session.outcome().winner() == Some(session.human()) {
            *engine_losses += 1;
        }
        return;
    }
    for coord in session.board().empty_cells() {
        let mut next = session.clone();
        next.play(coord).unwrap();
        explore(&next, engine_losses, games);
    }
}

#[test]
fn test_engine_never_loses_from_either_side() {
    for engine in Player::iter() {
        let session = Session::new(engine, DEFAULT_DEPTH).unwrap();
        let (mut losses, mut games) = (0, 0);
        explore(&session, &mut losses, &mut games);
        assert!(games > 0, "engine {engine}");
        assert_eq!(losses, 0, "engine {engine}");
    }
}

#[test]
fn test_engine_blocks_open_row() {
    let mut session = Session::new(Player::O, DEFAULT_DEPTH).unwrap();
    session.play(Coordinate::new(0, 0).unwrap()).unwrap();
    let reply = session.play(Coordinate::new(0, 1).unwrap());

    // Center was taken by the engine's first reply, so X could only
    // threaten the top row; the engine must block it.
    let reply = reply.unwrap();
    assert_eq!(
        reply.engine_move.map(|m| m.coord),
        Some(Coordinate::new(0, 2).unwrap())
    );
    assert_eq!(reply.outcome, Outcome::Ongoing);
}

#[test]
fn test_winning_move_ends_session() {
    let mut session = Session::new(Player::O, DEFAULT_DEPTH).unwrap();
    let mut last = None;
    for cell in ["1", "2", "4", "7", "9", "3", "5", "6", "8"] {
        if !session.outcome().is_ongoing() {
            break;
        }
        let coord: Coordinate = cell.parse().unwrap();
        if session.board().empty_cells().any(|c| c == coord) {
            last = Some(session.play(coord).unwrap());
        }
    }
    let reply = last.unwrap();
    assert!(!reply.outcome.is_ongoing());
    assert_ne!(reply.outcome.winner(), Some(Player::X));
    assert_eq!(
        session.play(Coordinate::new(1, 1).unwrap()),
        Err(MoveError::GameOver)
    );
}
