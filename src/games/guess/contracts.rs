//! Preconditions a guess must satisfy before it costs an attempt.
//!
//! Checks run in a fixed order: parse, range, duplicate. The first failure
//! wins and the game state is left untouched.

use super::action::{GuessError, ParsedGuess, RangeViolation, parse_guess};
use super::config::GameConfiguration;
use super::game::GameState;
use tracing::{debug, instrument};

/// Precondition: raw input reads as an integer.
pub struct GuessIsNumber;

impl GuessIsNumber {
    /// Parses the input, keeping overflow distinguishable from garbage.
    #[instrument]
    pub fn check(raw: &str) -> Result<ParsedGuess, GuessError> {
        parse_guess(raw)
    }
}

/// Precondition: the value lies in `[min_number, max_number]`.
pub struct WithinBounds;

impl WithinBounds {
    /// Narrows a parsed guess to an in-range value.
    #[instrument(skip(config))]
    pub fn check(
        parsed: ParsedGuess,
        config: &GameConfiguration,
    ) -> Result<i64, GuessError> {
        let above = RangeViolation::AboveMax {
            max: *config.max_number(),
        };
        let below = RangeViolation::BelowMin {
            min: *config.min_number(),
        };
        match parsed {
            ParsedGuess::Overflow => Err(GuessError::OutOfRange(above)),
            ParsedGuess::Underflow => Err(GuessError::OutOfRange(below)),
            ParsedGuess::Value(value) if value > *config.max_number() => {
                Err(GuessError::OutOfRange(above))
            }
            ParsedGuess::Value(value) if value < *config.min_number() => {
                Err(GuessError::OutOfRange(below))
            }
            ParsedGuess::Value(value) => Ok(value),
        }
    }
}

/// Precondition: the value has not been guessed this session.
pub struct NotYetGuessed;

impl NotYetGuessed {
    /// Rejects values already in the history.
    #[instrument(skip(state))]
    pub fn check(value: i64, state: &GameState) -> Result<(), GuessError> {
        if state.history().contains(&value) {
            Err(GuessError::DuplicateGuess(value))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a guess is legal if it parses, fits and is new.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates raw input against the current session.
    ///
    /// # Errors
    ///
    /// Returns the first [`GuessError`] encountered.
    #[instrument(skip(state, config))]
    pub fn check(
        raw: &str,
        state: &GameState,
        config: &GameConfiguration,
    ) -> Result<i64, GuessError> {
        let parsed = GuessIsNumber::check(raw)?;
        let value = WithinBounds::check(parsed, config)?;
        NotYetGuessed::check(value, state)?;
        debug!(value, "Guess is legal");
        Ok(value)
    }
}
