//! Headless replay: apply a move list and print the resulting view.

use crate::cli::OutputFormat;
use derive_more::{Display, Error, From};
use strictly_timetravel::{GameSession, JumpError, MoveError, Position, SortOrder};
use tracing::{debug, instrument};

/// Why a replay could not be produced.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A token is neither a cell number 0-8 nor a position label.
    #[display("Unrecognised move '{}'", _0)]
    #[from(ignore)]
    BadToken(#[error(not(source))] String),

    /// A move was rejected by the game.
    #[from(ignore)]
    #[display("Move {} rejected: {}", index + 1, source)]
    Rejected {
        /// Zero-based position in the move list.
        index: usize,
        /// Rejection reason.
        source: MoveError,
    },

    /// The requested step does not exist.
    #[display("{}", _0)]
    Jump(JumpError),

    /// JSON encoding failed.
    #[display("{}", _0)]
    Json(serde_json::Error),
}

/// Splits a move list on commas and whitespace into positions.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::BadToken(token.to_string()))
        })
        .collect()
}

/// Plays `moves`, optionally jumps, and renders the view in `format`.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run_replay(
    moves: &[Position],
    jump: Option<usize>,
    sort_order: SortOrder,
    format: OutputFormat,
) -> Result<String, ReplayError> {
    let mut session = GameSession::with_sort_order(sort_order);
    for (index, pos) in moves.iter().enumerate() {
        session
            .apply_move(*pos)
            .map_err(|source| ReplayError::Rejected { index, source })?;
    }
    if let Some(step) = jump {
        session.jump_to(step)?;
    }
    debug!(step = session.current_step(), "Replay complete");

    let view = session.derived_view();
    match format {
        OutputFormat::Text => Ok(view.to_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        let moves = parse_moves("0, 4 center,8").unwrap();
        assert_eq!(
            moves,
            vec![Position::TopLeft, Position::Center, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = parse_moves("0,11").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognised move '11'");
    }

    #[test]
    fn test_rejected_move_reports_index() {
        let moves = parse_moves("4 4").unwrap();
        let err = run_replay(&moves, None, SortOrder::Ascending, OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 rejected: Square Center is already occupied");
    }

    #[test]
    fn test_text_output() {
        let moves = parse_moves("0 1 3 4 6").unwrap();
        let out = run_replay(&moves, None, SortOrder::Descending, OutputFormat::Text).unwrap();

        assert!(out.starts_with("X|O|2\n-+-+-\nX|O|5\n-+-+-\nX|7|8"));
        assert!(out.contains("Winner: X\nWinning line: 0, 3, 6\n"));
        assert!(out.contains("Sort history: Descending\n> 5. Go to move #5 (0, 2)\n"));
        assert!(out.ends_with("  0. Go to game start\n"));
    }

    #[test]
    fn test_json_output_after_jump() {
        let moves = parse_moves("4,0,8").unwrap();
        let out = run_replay(&moves, Some(1), SortOrder::Ascending, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["status"]["NextPlayer"], "O");
        assert_eq!(json["moves"][1]["is_current"], true);
        assert_eq!(json["moves"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_jump_out_of_range() {
        let moves = parse_moves("4").unwrap();
        let err = run_replay(&moves, Some(5), SortOrder::Ascending, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, ReplayError::Jump(JumpError::OutOfRange { step: 5, len: 2 })));
    }
}
