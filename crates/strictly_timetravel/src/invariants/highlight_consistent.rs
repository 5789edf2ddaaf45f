//! Highlight invariant: recorded winning lines match the board.

use super::Invariant;
use crate::GameSession;
use crate::rules::winning_line;

/// Invariant: each entry's highlight is exactly the board's winning line.
pub struct HighlightConsistentInvariant;

impl Invariant<GameSession> for HighlightConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .iter()
            .all(|entry| *entry.highlighted() == winning_line(entry.board()))
    }

    fn description() -> &'static str {
        "Highlighted cells match the winning line of each board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position::*;
    use crate::history::HistoryEntry;

    #[test]
    fn test_won_game_holds() {
        let session =
            GameSession::replay(&[TopLeft, Center, MiddleLeft, TopRight, BottomLeft]).unwrap();
        assert!(session.current_entry().highlighted().is_some());
        assert!(HighlightConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_stale_highlight_violates() {
        let mut session = GameSession::replay(&[TopLeft]).unwrap();
        let board = *session.history[1].board();
        session.history[1] =
            HistoryEntry::from_parts(board, Some([TopLeft, TopCenter, TopRight]), Some(TopLeft));
        assert!(!HighlightConsistentInvariant::holds(&session));
    }
}
