//! First-class invariants for the guessing game.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and testable on their own.

use super::game::GuessGame;
use super::types::Phase;
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
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
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }
        collect(violations)
    }
}

/// Invariant: no value appears twice in the history.
pub struct HistoryDistinctInvariant;

impl Invariant<GuessGame> for HistoryDistinctInvariant {
    fn holds(game: &GuessGame) -> bool {
        let history = game.state().history();
        history.iter().collect::<HashSet<_>>().len() == history.len()
    }

    fn description() -> &'static str {
        "History contains no duplicate guesses"
    }
}

/// Invariant: every spent attempt is one history entry.
pub struct AttemptsAccountedInvariant;

impl Invariant<GuessGame> for AttemptsAccountedInvariant {
    fn holds(game: &GuessGame) -> bool {
        let state = game.state();
        let max = u64::from(*game.config().max_attempts());
        let spent = state.history().len() as u64;
        state.remaining_attempts() as u64 + spent == max
    }

    fn description() -> &'static str {
        "Remaining attempts plus history length equals max attempts"
    }
}

/// Invariant: the secret lies within the configured bounds.
pub struct SecretInBoundsInvariant;

impl Invariant<GuessGame> for SecretInBoundsInvariant {
    fn holds(game: &GuessGame) -> bool {
        game.config().contains(game.state().secret())
    }

    fn description() -> &'static str {
        "Secret lies within configured bounds"
    }
}

/// Invariant: terminal phases agree with the history.
///
/// `Won` ends on the secret; `Lost` has no attempts left and never saw it.
pub struct TerminalPhaseInvariant;

impl Invariant<GuessGame> for TerminalPhaseInvariant {
    fn holds(game: &GuessGame) -> bool {
        let state = game.state();
        match state.phase() {
            Phase::Playing => !state.history().contains(&state.secret()),
            Phase::Won => state.history().last() == Some(&state.secret()),
            Phase::Lost => {
                state.remaining_attempts() == 0 && !state.history().contains(&state.secret())
            }
        }
    }

    fn description() -> &'static str {
        "Phase is consistent with history and attempts"
    }
}

/// All guessing game invariants.
pub type GuessInvariants = (
    HistoryDistinctInvariant,
    AttemptsAccountedInvariant,
    SecretInBoundsInvariant,
    TerminalPhaseInvariant,
);
