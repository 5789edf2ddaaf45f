//! First-class invariants for a game session's history.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The session asserts them in debug builds; they are also testable
//! on their own against deliberately corrupted sessions.

pub mod empty_origin;
pub mod highlight_consistent;
pub mod single_move_delta;

pub use empty_origin::EmptyOriginInvariant;
pub use highlight_consistent::HighlightConsistentInvariant;
pub use single_move_delta::SingleMoveDeltaInvariant;

use crate::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples; every member is checked so the error lists
/// all violations, not just the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A member of an invariant set: its check and its description.
type Check<S> = (fn(&S) -> bool, fn() -> &'static str);

fn check_each<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(description()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        check_each(
            &[
                (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description),
                (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description),
            ],
            state,
        )
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        check_each(
            &[
                (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description),
                (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description),
                (<I3 as Invariant<S>>::holds, <I3 as Invariant<S>>::description),
            ],
            state,
        )
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    EmptyOriginInvariant,
    SingleMoveDeltaInvariant,
    HighlightConsistentInvariant,
);

/// Checks [`SessionInvariants`] against `session`.
pub fn check_session(session: &GameSession) -> Result<(), Vec<InvariantViolation>> {
    SessionInvariants::check_all(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::history::HistoryEntry;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(check_session(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        session.jump_to(2).unwrap();
        session.apply_move(Position::TopCenter).unwrap();

        assert!(check_session(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = GameSession::replay(&[Position::Center]).unwrap();
        session.history[0] = session.history[1].clone();

        let violations = check_session(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, EmptyOriginInvariant::description());
        assert_eq!(violations[1].description, SingleMoveDeltaInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut session = GameSession::replay(&[Position::Center]).unwrap();
        session.history.push(HistoryEntry::origin());

        type Pair = (EmptyOriginInvariant, HighlightConsistentInvariant);
        assert!(Pair::check_all(&session).is_ok());
        assert!(check_session(&session).is_err());
    }
}
