//! Origin invariant: every timeline starts from the empty board.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: history is non-empty and entry 0 is the empty board with no move.
pub struct EmptyOriginInvariant;

impl Invariant<GameSession> for EmptyOriginInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .first()
            .is_some_and(|origin| origin.board() == &Board::new() && origin.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}
