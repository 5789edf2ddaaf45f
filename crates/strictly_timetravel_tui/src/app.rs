//! Application state and logic.

use crate::input::{digit_position, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_timetravel::{DerivedView, GameSession, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Holds the game session plus state that only matters to the terminal:
/// cursor, focus, history selection and a transient notice.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            session: GameSession::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current view of the session.
    pub fn view(&self) -> DerivedView {
        self.session.derived_view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Message about the last rejected action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::History {
                    self.select_current_step();
                }
            }
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Home
            | KeyCode::End => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => {
                    let len = self.session.history().len();
                    self.selected = move_selection(self.selected, len, key);
                }
            },
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
        }
    }

    /// Plays the next mark at `pos`; rejected moves only leave a notice.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        match self.session.apply_move(pos) {
            Ok(()) => {
                debug!(step = self.session.current_step(), "Move applied");
                self.select_current_step();
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Jumps to the step under the history selection.
    #[instrument(skip(self), fields(selected = self.selected))]
    pub fn jump_to_selected(&mut self) {
        let Some(step) = self.view().moves().get(self.selected).map(|item| *item.step()) else {
            return;
        };
        if let Err(e) = self.session.jump_to(step) {
            debug!(error = %e, "Jump ignored");
            self.notice = Some(e.to_string());
        }
    }

    /// Flips the move-list order, keeping the same entry selected.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        let last = self.session.history().len() - 1;
        self.session.toggle_sort_order();
        self.selected = last.saturating_sub(self.selected);
    }

    /// Points the history selection at the displayed step.
    fn select_current_step(&mut self) {
        if let Some(row) = self.view().moves().iter().position(|item| *item.is_current()) {
            self.selected = row;
        }
    }
}
