//! Game session with time-travel history.
//!
//! The session owns an append-only list of board snapshots plus a pointer
//! to the step currently on display. Jumping only moves the pointer;
//! playing a move from an earlier step discards every later entry before
//! appending the new one.

use crate::error::{JumpError, MoveError};
use crate::history::HistoryEntry;
use crate::rules::winner;
use crate::view::{DerivedView, MoveListItem, SortOrder, Status};
use crate::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Number of moves that fill the board.
const FULL_BOARD_STEP: usize = 9;

/// A single game of tic-tac-toe with navigable history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    sort_order: SortOrder,
}

impl GameSession {
    /// Creates a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a session whose move list starts in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::origin()],
            current_step: 0,
            sort_order,
        }
    }

    /// Builds a session by playing `moves` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; earlier moves are discarded with the
    /// partially built session.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for pos in moves {
            session.apply_move(*pos)?;
        }
        Ok(session)
    }

    /// Full timeline, index 0 being the game start.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry on display.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the most recently played entry.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Entry on display.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Board on display.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player to move at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.current_step)
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Places the next player's mark at `pos` on the displayed board.
    ///
    /// Any entries after the displayed step are discarded first.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the session untouched, when the displayed
    /// board already has a winner or `pos` is occupied.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = self.current_entry();
        if winner(current.board()).is_some() {
            debug!("Rejecting move, game already decided");
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            debug!("Rejecting move, square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let entry = current.successor(pos, self.next_player());
        let discarded = self.last_step() - self.current_step;
        if discarded > 0 {
            info!(discarded, "Discarding future entries after time travel");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(entry);
        self.current_step = self.last_step();

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};
            if let Err(violations) = SessionInvariants::check_all(self) {
                panic!("Session invariants violated after move: {:?}", violations);
            }
        }

        Ok(())
    }

    /// Displays the entry at `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] and leaves the session untouched if
    /// `step` is past the last entry.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step > self.last_step() {
            debug!("Rejecting jump past end of history");
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(from = ?self.sort_order))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    /// Status for the displayed step: winner, then draw, then next player.
    pub fn status(&self) -> Status {
        if let Some(player) = winner(self.current_board()) {
            Status::Winner(player)
        } else if self.current_step == FULL_BOARD_STEP {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// Projects the session into what the rendering layer paints.
    #[instrument(level = "trace", skip(self), fields(step = self.current_step))]
    pub fn derived_view(&self) -> DerivedView {
        let mut moves: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListItem::new(entry.label(step), step == self.current_step, step)
            })
            .collect();
        if !self.sort_order.is_ascending() {
            moves.reverse();
        }

        let highlighted = self
            .current_entry()
            .highlighted()
            .as_ref()
            .map(|line| line.to_vec())
            .unwrap_or_default();

        DerivedView::new(
            self.status(),
            *self.current_board(),
            highlighted,
            moves,
            self.sort_order,
        )
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
