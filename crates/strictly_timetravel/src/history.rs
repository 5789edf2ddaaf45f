//! Recorded points in a game's timeline.

use crate::rules::{Line, winning_line};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board snapshot plus the metadata needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board after this entry's move.
    board: Board,
    /// Winning line on `board`, if any.
    highlighted: Option<Line>,
    /// Cell placed to produce this entry; `None` for the game start.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn origin() -> Self {
        Self {
            board: Board::new(),
            highlighted: None,
            last_move: None,
        }
    }

    /// Builds the entry that follows `self` when `player` plays `pos`.
    ///
    /// The caller is responsible for checking that `pos` is empty.
    pub(crate) fn successor(&self, pos: Position, player: Player) -> Self {
        let board = self.board.with_mark(pos, player);
        Self {
            highlighted: winning_line(&board),
            board,
            last_move: Some(pos),
        }
    }

    /// Label shown in the move list for the entry at `step`.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) => format!("Go to move #{} ({}, {})", step, pos.column(), pos.row()),
            None => "Go to game start".to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        highlighted: Option<Line>,
        last_move: Option<Position>,
    ) -> Self {
        Self {
            board,
            highlighted,
            last_move,
        }
    }
}
