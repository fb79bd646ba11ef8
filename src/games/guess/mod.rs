//! Bounded-attempts number guessing game.

mod action;
mod color_cycle;
mod config;
mod contracts;
mod game;
mod invariants;
mod render;
mod types;

pub use action::{GuessError, ParsedGuess, RangeViolation};
pub use color_cycle::ColorCycle;
pub use config::{ConfigError, GameConfiguration};
pub use contracts::{GuessIsNumber, LegalGuess, NotYetGuessed, WithinBounds};
pub use game::{GameState, GuessGame};
pub use invariants::{
    AttemptsAccountedInvariant, GuessInvariants, HistoryDistinctInvariant, Invariant,
    InvariantSet, InvariantViolation, SecretInBoundsInvariant, TerminalPhaseInvariant,
};
pub use render::RenderInstruction;
pub use types::{ActionLabel, HighlightColor, Phase, StatusText};
