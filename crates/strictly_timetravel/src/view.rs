//! Read-only projection of a session for the rendering layer.

use crate::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Display order for the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Most recent move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether the move list starts at the game start.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Label for the sort toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort history: Ascending",
            Self::Descending => "Sort history: Descending",
        }
    }
}

/// Status line for the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine cells filled without a winner.
    #[display("Draw Game")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveListItem {
    /// Text shown for the row.
    label: String,
    /// Whether this row is the displayed step.
    is_current: bool,
    /// History index to jump to.
    step: usize,
}

/// Everything the rendering layer needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct DerivedView {
    /// Status line.
    status: Status,
    /// Board at the current step.
    board: Board,
    /// Cells of the winning line at the current step, if any.
    highlighted: Vec<Position>,
    /// Move list in display order.
    moves: Vec<MoveListItem>,
    /// Current move-list order.
    sort_order: SortOrder,
}

impl DerivedView {
    /// Status text, e.g. `"Next player: O"`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Label for the sort toggle control.
    pub fn sort_label(&self) -> &'static str {
        self.sort_order.label()
    }

    /// Whether `pos` belongs to the highlighted winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    /// Renders the view as plain text: board, status, sort label and the
    /// move list with the current entry marked by `>`.
    pub fn to_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status_text());
        out.push('\n');
        if !self.highlighted.is_empty() {
            let cells = self
                .highlighted
                .iter()
                .map(|pos| pos.to_index().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("Winning line: {}\n", cells));
        }
        out.push_str(self.sort_label());
        out.push('\n');
        for item in &self.moves {
            let marker = if item.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, item.step, item.label));
        }
        out
    }
}
