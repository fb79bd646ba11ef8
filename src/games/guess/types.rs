//! Core domain types for the guessing game.

use super::config::GameConfiguration;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

/// Stage of a single play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Guesses are accepted.
    Playing,
    /// The secret was found.
    Won,
    /// Attempts ran out before the secret was found.
    Lost,
}

impl Phase {
    /// Returns true for `Won` and `Lost`, which only `reset` leaves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// The action the next submit should trigger in this phase.
    pub fn action_label(self) -> ActionLabel {
        match self {
            Phase::Playing => ActionLabel::Guess,
            Phase::Won | Phase::Lost => ActionLabel::PlayAgain,
        }
    }
}

/// Logical action bound to the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ActionLabel {
    /// Submit the input as a guess.
    #[strum(to_string = "Guess")]
    Guess,
    /// Start a new session.
    #[strum(to_string = "Play again")]
    PlayAgain,
}

/// Enumerated user-facing status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusText {
    /// Fresh session, nothing guessed yet.
    Initial,
    /// Last guess was below the secret.
    TooLow,
    /// Last guess was above the secret.
    TooHigh,
    /// The secret was guessed.
    Win,
    /// Attempts exhausted.
    GameOver,
    /// Input did not parse as an integer.
    InvalidNumber,
    /// Input was already guessed this session.
    DuplicateGuess,
    /// Input exceeds the configured maximum.
    NumberTooHigh,
    /// Input is below the configured minimum.
    NumberTooLow,
}

impl StatusText {
    /// Returns the sentence shown to the player.
    pub fn message(self, config: &GameConfiguration) -> String {
        match self {
            StatusText::Initial => "Add a guess!".to_string(),
            StatusText::TooLow => "TOO LOW!".to_string(),
            StatusText::TooHigh => "TOO HIGH!".to_string(),
            StatusText::Win => "YOU GUESSED THE NUMBER!".to_string(),
            StatusText::GameOver => "Game Over".to_string(),
            StatusText::InvalidNumber => "Please enter a valid number".to_string(),
            StatusText::DuplicateGuess => "This number is already guessed".to_string(),
            StatusText::NumberTooHigh => {
                format!("Enter a number no higher than {}", config.max_number())
            }
            StatusText::NumberTooLow => {
                format!("Enter a number no lower than {}", config.min_number())
            }
        }
    }

    /// Returns true if the status reports rejected input.
    pub fn is_rejection(self) -> bool {
        matches!(
            self,
            StatusText::InvalidNumber
                | StatusText::DuplicateGuess
                | StatusText::NumberTooHigh
                | StatusText::NumberTooLow
        )
    }
}

/// Palette for the victory color cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HighlightColor {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Pink.
    Pink,
    /// Brown.
    Brown,
    /// Gray.
    Gray,
    /// Black.
    Black,
}

impl HighlightColor {
    /// Draws a palette color uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::VARIANTS[rng.random_range(0..Self::VARIANTS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
    }

    #[test]
    fn test_action_label_follows_phase() {
        assert_eq!(Phase::Playing.action_label(), ActionLabel::Guess);
        assert_eq!(Phase::Won.action_label(), ActionLabel::PlayAgain);
        assert_eq!(Phase::Lost.action_label(), ActionLabel::PlayAgain);
        assert_eq!(ActionLabel::PlayAgain.to_string(), "Play again");
    }

    #[test]
    fn test_range_messages_quote_bounds() {
        let config = GameConfiguration::new(5, 1, -20, 20, 50).unwrap();
        assert_eq!(
            StatusText::NumberTooHigh.message(&config),
            "Enter a number no higher than 20"
        );
        assert_eq!(
            StatusText::NumberTooLow.message(&config),
            "Enter a number no lower than -20"
        );
    }

    #[test]
    fn test_random_color_covers_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(HighlightColor::random(&mut rng));
        }
        assert_eq!(seen.len(), HighlightColor::VARIANTS.len());
    }

    #[test]
    fn test_color_names_are_lowercase() {
        assert_eq!(HighlightColor::Purple.to_string(), "purple");
    }
}
