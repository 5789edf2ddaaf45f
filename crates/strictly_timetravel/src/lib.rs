//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! Pure game logic with no I/O. A rendering layer drives a
//! [`GameSession`] with moves, jumps and sort toggles, and paints the
//! [`DerivedView`] it reads back.
//!
//! # Architecture
//!
//! - **Rules**: pure outcome evaluation over a single board
//! - **Session**: append-only history of snapshots plus a current step
//! - **Invariants**: history properties asserted after every move in debug builds
//! - **View**: the read-only projection a front end renders
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, Position, Status, Player};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::Center).unwrap();
//! session.apply_move(Position::TopLeft).unwrap();
//! session.jump_to(1).unwrap();
//!
//! let view = session.derived_view();
//! assert_eq!(view.status(), &Status::NextPlayer(Player::O));
//! assert_eq!(view.moves().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod invariants;
mod position;
mod rules;
mod session;
mod types;
mod view;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Outcome evaluation
pub use rules::{LINES, Line, is_full, winner, winning_line};

// Crate-level exports - Session
pub use error::{JumpError, MoveError};
pub use history::HistoryEntry;
pub use session::GameSession;
pub use view::{DerivedView, MoveListItem, SortOrder, Status};

// Crate-level exports - Invariants
pub use invariants::{
    EmptyOriginInvariant, HighlightConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, SingleMoveDeltaInvariant, check_session,
};

/// Alias for clarity when talking about what occupies a square.
pub type Mark = Player;
