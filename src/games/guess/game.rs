//! Game engine for the guessing game.
//!
//! [`GuessGame`] owns one [`GameState`] at a time. Guesses mutate it in place;
//! `reset` discards it wholesale, which is also what cancels the victory
//! color cycle.

use super::color_cycle::ColorCycle;
use super::config::{ConfigError, GameConfiguration};
use super::contracts::LegalGuess;
use super::invariants::{GuessInvariants, InvariantSet};
use super::render::{RenderInstruction, history_text};
use super::types::{HighlightColor, Phase, StatusText};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

/// Phase with its phase-only data.
///
/// The color cycle handle exists only inside `Won`.
#[derive(Debug)]
enum SessionPhase {
    Playing,
    Won { color_cycle: ColorCycle },
    Lost,
}

/// State of a single play session.
#[derive(Debug)]
pub struct GameState {
    secret: i64,
    remaining_attempts: u32,
    history: Vec<i64>,
    phase: SessionPhase,
}

impl GameState {
    pub(super) fn new(secret: i64, max_attempts: u32) -> Self {
        Self {
            secret,
            remaining_attempts: max_attempts,
            history: Vec::new(),
            phase: SessionPhase::Playing,
        }
    }

    /// The number being guessed.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Attempts left this session.
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Accepted guesses in submission order.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.phase {
            SessionPhase::Playing => Phase::Playing,
            SessionPhase::Won { .. } => Phase::Won,
            SessionPhase::Lost => Phase::Lost,
        }
    }

    /// Returns true while a color cycle handle is held.
    pub fn is_color_cycling(&self) -> bool {
        matches!(self.phase, SessionPhase::Won { .. })
    }

    /// Spends one attempt on an accepted guess.
    pub(super) fn record(&mut self, value: i64) {
        self.history.push(value);
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
    }

    #[cfg(test)]
    pub(super) fn set_remaining_attempts(&mut self, remaining: u32) {
        self.remaining_attempts = remaining;
    }

    #[cfg(test)]
    pub(super) fn set_lost(&mut self) {
        self.phase = SessionPhase::Lost;
    }
}

/// Bounded-attempts number guessing game.
///
/// Invalid input never escapes as an error: every call yields a
/// [`RenderInstruction`] whose status says what happened.
#[derive(Debug)]
pub struct GuessGame {
    config: GameConfiguration,
    state: GameState,
    status: StatusText,
    rng: StdRng,
}

impl GuessGame {
    /// Creates a game with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is not playable.
    #[instrument(skip(config))]
    pub fn new(config: GameConfiguration) -> Result<Self, ConfigError> {
        Self::from_parts(config, StdRng::from_os_rng(), None)
    }

    /// Creates a game whose secrets and colors derive from `seed`.
    #[instrument(skip(config))]
    pub fn seeded(config: GameConfiguration, seed: u64) -> Result<Self, ConfigError> {
        Self::from_parts(config, StdRng::seed_from_u64(seed), None)
    }

    /// Creates a game with a chosen first secret. Later resets draw randomly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `secret` lies outside the configured bounds.
    #[instrument(skip(config))]
    pub fn with_secret(config: GameConfiguration, secret: i64) -> Result<Self, ConfigError> {
        Self::from_parts(config, StdRng::from_os_rng(), Some(secret))
    }

    fn from_parts(
        config: GameConfiguration,
        mut rng: StdRng,
        secret: Option<i64>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let secret = match secret {
            Some(secret) if !config.contains(secret) => {
                return Err(ConfigError::new(format!(
                    "secret {} is outside {}..={}",
                    secret,
                    config.min_number(),
                    config.max_number()
                )));
            }
            Some(secret) => secret,
            None => draw_secret(&config, &mut rng),
        };
        debug!(secret, "Secret chosen");
        info!(
            max_attempts = config.max_attempts(),
            min_number = config.min_number(),
            max_number = config.max_number(),
            "New guessing game"
        );
        let state = GameState::new(secret, *config.max_attempts());
        Ok(Self {
            config,
            state,
            status: StatusText::Initial,
            rng,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    /// Returns the current session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(super) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Submits raw input as a guess.
    ///
    /// Rejected input leaves the state untouched. After a win or loss the call
    /// is ignored and the current instruction is returned.
    #[instrument(skip(self), fields(phase = %self.state.phase(), remaining = self.state.remaining_attempts))]
    pub fn submit_guess(&mut self, raw: &str) -> RenderInstruction {
        if self.state.phase().is_terminal() {
            debug!("Ignoring guess after session ended");
            return self.current();
        }

        let value = match LegalGuess::check(raw, &self.state, &self.config) {
            Ok(value) => value,
            Err(e) => {
                info!(error = %e, "Guess rejected");
                self.status = e.status();
                return self.current();
            }
        };

        self.state.record(value);

        // A correct final guess wins; only a wrong final guess loses.
        let status = match value.cmp(&self.state.secret) {
            Ordering::Equal => {
                self.state.phase = SessionPhase::Won {
                    color_cycle: ColorCycle::start(self.config.color_cycle_interval()),
                };
                StatusText::Win
            }
            _ if self.state.remaining_attempts == 0 => {
                self.state.phase = SessionPhase::Lost;
                StatusText::GameOver
            }
            Ordering::Less => StatusText::TooLow,
            Ordering::Greater => StatusText::TooHigh,
        };

        info!(
            value,
            ?status,
            remaining = self.state.remaining_attempts,
            phase = %self.state.phase(),
            "Guess accepted"
        );
        self.status = status;
        self.assert_invariants();
        self.current()
    }

    /// Starts a new session, cancelling any color cycle.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn reset(&mut self) -> RenderInstruction {
        let secret = draw_secret(&self.config, &mut self.rng);
        debug!(secret, "Secret chosen");
        // Replacing the state drops the old phase and its color cycle.
        self.state = GameState::new(secret, *self.config.max_attempts());
        self.status = StatusText::Initial;
        info!("Game reset");
        self.assert_invariants();
        self.current()
    }

    /// Renders the latest status against the current state.
    pub fn current(&self) -> RenderInstruction {
        self.render(None)
    }

    /// Waits for the next color cycle tick and renders it with a random color.
    ///
    /// Never resolves unless the session is won. Cancel safe.
    pub async fn next_highlight(&mut self) -> RenderInstruction {
        match &mut self.state.phase {
            SessionPhase::Won { color_cycle } => color_cycle.tick().await,
            SessionPhase::Playing | SessionPhase::Lost => std::future::pending::<()>().await,
        }
        let color = HighlightColor::random(&mut self.rng);
        self.render(Some(color))
    }

    fn render(&self, highlight_color: Option<HighlightColor>) -> RenderInstruction {
        let phase = self.state.phase();
        RenderInstruction {
            status: self.status,
            history: self.state.history.clone(),
            history_text: history_text(&self.state.history),
            attempts_remaining: self.state.remaining_attempts,
            low_attempts_warning: phase == Phase::Playing
                && self.state.remaining_attempts <= *self.config.warning_threshold(),
            action_label: phase.action_label(),
            highlight_color,
        }
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = GuessInvariants::check_all(self) {
                for violation in &violations {
                    warn!(description = %violation.description, "Invariant violated");
                }
                debug_assert!(violations.is_empty(), "Invariant violated: {:?}", violations);
            }
        }
    }
}

fn draw_secret(config: &GameConfiguration, rng: &mut StdRng) -> i64 {
    rng.random_range(*config.min_number()..=*config.max_number())
}
