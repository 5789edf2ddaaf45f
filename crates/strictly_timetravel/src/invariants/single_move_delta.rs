//! Delta invariant: consecutive entries differ by exactly one placed mark.

use super::Invariant;
use crate::rules::winner;
use crate::{GameSession, Player, Square};

/// Invariant: every entry after the first adds the mover's mark at its
/// `last_move` and changes nothing else.
///
/// Also covers what follows from that: movers alternate starting with X,
/// nothing is appended after a won entry, and the current step points at
/// an existing entry.
pub struct SingleMoveDeltaInvariant;

impl Invariant<GameSession> for SingleMoveDeltaInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = &session.history;
        if session.current_step >= history.len() {
            return false;
        }

        history.windows(2).enumerate().all(|(idx, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let step = idx + 1;
            let Some(pos) = *after.last_move() else {
                return false;
            };
            let mover = Player::to_move_at(step - 1);

            let placed = before.board().get(pos) == Square::Empty
                && after.board().get(pos) == Square::Occupied(mover);
            let rest_unchanged = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .enumerate()
                .all(|(cell, (b, a))| cell == pos.to_index() || b == a);

            placed && rest_unchanged && winner(before.board()).is_none()
        })
    }

    fn description() -> &'static str {
        "Each entry adds exactly one mark for the alternating mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position::*;
    use crate::history::HistoryEntry;

    #[test]
    fn test_played_game_holds() {
        let session = GameSession::replay(&[Center, TopLeft, BottomRight, TopRight]).unwrap();
        assert!(SingleMoveDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut session = GameSession::replay(&[Center]).unwrap();
        let board = session.history[1].board().with_mark(TopLeft, Player::O);
        session.history[1] = HistoryEntry::from_parts(board, None, Some(Center));
        assert!(!SingleMoveDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut session = GameSession::new();
        let board = session.history[0].board().with_mark(Center, Player::O);
        session.history.push(HistoryEntry::from_parts(board, None, Some(Center)));
        assert!(!SingleMoveDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_entry_after_win_violates() {
        let mut session =
            GameSession::replay(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
        let board = session.history[5].board().with_mark(BottomRight, Player::O);
        session.history.push(HistoryEntry::from_parts(board, None, Some(BottomRight)));
        assert!(!SingleMoveDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut session = GameSession::replay(&[Center]).unwrap();
        session.current_step = 5;
        assert!(!SingleMoveDeltaInvariant::holds(&session));
    }
}
