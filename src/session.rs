//! Play session plumbing between a game and its front end.
//!
//! A front end supplies an [`InputSurface`] that raises submit and reset
//! events, and a [`DisplaySurface`] that draws render instructions.
//! [`run_session`] drives one game between the two on a single task.

use crate::games::guess::{ActionLabel, GuessGame, RenderInstruction};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Discrete events raised by an input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The submit control fired with the raw input text.
    Submit(String),
    /// Explicit request for a new session.
    Reset,
}

/// Source of player input.
#[async_trait::async_trait]
pub trait InputSurface: Send {
    /// Waits for the next event. `None` means the surface has closed.
    ///
    /// Implementations must be cancel safe: [`run_session`] drops this future
    /// whenever a color cycle tick arrives first.
    async fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Sink for render instructions.
pub trait DisplaySurface {
    /// Draws the instruction.
    fn render(&mut self, instruction: &RenderInstruction) -> Result<()>;
}

/// Routes an input event to the matching game operation.
///
/// A submit while the action label reads "Play again" starts a new session,
/// the way a single guess button doubles as the replay button.
#[instrument(skip(game))]
pub fn dispatch(game: &mut GuessGame, event: InputEvent) -> RenderInstruction {
    match event {
        InputEvent::Submit(raw) => match game.phase().action_label() {
            ActionLabel::Guess => game.submit_guess(&raw),
            ActionLabel::PlayAgain => game.reset(),
        },
        InputEvent::Reset => game.reset(),
    }
}

/// Runs a session until the input surface closes.
///
/// Input is polled ahead of color cycle ticks, so a reset that arrives
/// together with a tick is applied first and the tick never fires.
#[instrument(skip_all)]
pub async fn run_session<I, D>(game: &mut GuessGame, input: &mut I, display: &mut D) -> Result<()>
where
    I: InputSurface + ?Sized,
    D: DisplaySurface + ?Sized,
{
    info!("Session started");
    display.render(&game.current())?;

    loop {
        tokio::select! {
            biased;

            event = input.next_event() => {
                match event? {
                    Some(event) => {
                        debug!(?event, "Input event");
                        let instruction = dispatch(game, event);
                        display.render(&instruction)?;
                    }
                    None => {
                        info!("Input closed, ending session");
                        return Ok(());
                    }
                }
            }
            instruction = game.next_highlight() => {
                display.render(&instruction)?;
            }
        }
    }
}

/// Input surface fed through a tokio channel.
///
/// Closes once every sender has been dropped.
#[derive(Debug)]
pub struct ChannelInput {
    rx: mpsc::UnboundedReceiver<InputEvent>,
}

impl ChannelInput {
    /// Creates a connected sender and input surface.
    pub fn channel() -> (mpsc::UnboundedSender<InputEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait::async_trait]
impl InputSurface for ChannelInput {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.rx.recv().await)
    }
}
