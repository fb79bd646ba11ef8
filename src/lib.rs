//! Strictly Guess library - type-safe number guessing game
//!
//! A bounded-attempts guessing game whose rules know nothing about the
//! screen they are played on.
//!
//! # Architecture
//!
//! - **Games**: the [`GuessGame`] engine, its configuration, validation
//!   contracts and invariants
//! - **Session**: [`InputSurface`] / [`DisplaySurface`] collaborators and the
//!   [`run_session`] event loop
//! - **Console**: line-oriented front end (text or JSON lines)
//! - **TUI**: ratatui terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_guess::{GameConfiguration, GuessGame, StatusText};
//!
//! # fn example() -> Result<(), strictly_guess::ConfigError> {
//! let mut game = GuessGame::with_secret(GameConfiguration::default(), 42)?;
//! assert_eq!(game.submit_guess("50").status, StatusText::TooHigh);
//! assert_eq!(game.submit_guess("42").status, StatusText::Win);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod session;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Game types
pub use games::guess::{
    ActionLabel, ColorCycle, ConfigError, GameConfiguration, GameState, GuessError, GuessGame,
    HighlightColor, ParsedGuess, Phase, RangeViolation, RenderInstruction, StatusText,
};

// Crate-level exports - Validation contracts and invariants
pub use games::guess::{
    AttemptsAccountedInvariant, GuessInvariants, GuessIsNumber, HistoryDistinctInvariant,
    Invariant, InvariantSet, InvariantViolation, LegalGuess, NotYetGuessed,
    SecretInBoundsInvariant, TerminalPhaseInvariant, WithinBounds,
};

// Crate-level exports - Session plumbing
pub use session::{ChannelInput, DisplaySurface, InputEvent, InputSurface, dispatch, run_session};

// Crate-level exports - Console front end
pub use console::{ConsoleDisplay, JsonDisplay, LineInput, RESET_COMMAND};
