//! Guess parsing and rejection reasons.
//!
//! Rejections are expected, recoverable input conditions. None of them
//! mutate game state; each maps onto a status message.

use super::types::StatusText;
use std::num::IntErrorKind;
use tracing::instrument;

/// Which bound a guess fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RangeViolation {
    /// Guess exceeded the maximum.
    #[display("Guess is above the maximum of {max}")]
    AboveMax {
        /// Configured maximum.
        max: i64,
    },
    /// Guess fell below the minimum.
    #[display("Guess is below the minimum of {min}")]
    BelowMin {
        /// Configured minimum.
        min: i64,
    },
}

/// Reason a submitted guess was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Input was empty or not an integer.
    #[display("Input is not a number")]
    NotANumber,

    /// Parsed value lies outside the configured bounds.
    #[display("{}", _0)]
    OutOfRange(RangeViolation),

    /// Value was already guessed this session.
    #[display("{} was already guessed", _0)]
    DuplicateGuess(i64),
}

impl std::error::Error for GuessError {}

impl GuessError {
    /// Status message reported for this rejection.
    pub fn status(&self) -> StatusText {
        match self {
            GuessError::NotANumber => StatusText::InvalidNumber,
            GuessError::OutOfRange(RangeViolation::AboveMax { .. }) => StatusText::NumberTooHigh,
            GuessError::OutOfRange(RangeViolation::BelowMin { .. }) => StatusText::NumberTooLow,
            GuessError::DuplicateGuess(_) => StatusText::DuplicateGuess,
        }
    }
}

/// Numeric reading of raw input, before any bounds are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedGuess {
    /// Fits in `i64`.
    Value(i64),
    /// Integer too large to represent.
    Overflow,
    /// Integer too small to represent.
    Underflow,
}

/// Reads raw input as a signed base-10 integer.
///
/// Surrounding whitespace is ignored. Fractions and exponents are rejected.
#[instrument]
pub(super) fn parse_guess(raw: &str) -> Result<ParsedGuess, GuessError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(ParsedGuess::Value(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(ParsedGuess::Overflow),
            IntErrorKind::NegOverflow => Ok(ParsedGuess::Underflow),
            _ => Err(GuessError::NotANumber),
        },
    }
}
