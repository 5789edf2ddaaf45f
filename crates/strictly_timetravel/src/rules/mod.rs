//! Outcome evaluation for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or turns, so the session and the invariant checks can share
//! one definition of what a win is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winner, winning_line};
