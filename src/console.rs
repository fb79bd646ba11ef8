//! Line-oriented front end: one line in, one frame out.

use crate::games::guess::{GameConfiguration, RenderInstruction};
use crate::session::{DisplaySurface, InputEvent, InputSurface};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{instrument, trace};

/// Line that requests a reset instead of submitting a guess.
pub const RESET_COMMAND: &str = "/reset";

/// Input surface reading one event per line.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the game as an unparseable guess.
pub struct LineInput<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineInput<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl<R> InputSurface for LineInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[instrument(skip(self))]
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        // Partial reads stay in `buf` if this future is dropped.
        self.reader
            .read_until(b'\n', &mut self.buf)
            .await
            .context("Failed to read input line")?;
        if self.buf.is_empty() {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        self.buf.clear();

        if line.trim() == RESET_COMMAND {
            Ok(Some(InputEvent::Reset))
        } else {
            Ok(Some(InputEvent::Submit(line)))
        }
    }
}

/// Plain text display.
///
/// Color cycle ticks are skipped: text already written cannot be recolored.
pub struct ConsoleDisplay<W> {
    out: W,
    config: GameConfiguration,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W, config: GameConfiguration) -> Self {
        Self { out, config }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for ConsoleDisplay<W> {
    fn render(&mut self, instruction: &RenderInstruction) -> Result<()> {
        if instruction.highlight_color.is_some() {
            trace!("Skipping color cycle tick");
            return Ok(());
        }

        let warning = if instruction.low_attempts_warning {
            " (!)"
        } else {
            ""
        };
        writeln!(self.out, "{}", instruction.status.message(&self.config))?;
        writeln!(self.out, "  Guesses:  {}", instruction.history_text)?;
        writeln!(
            self.out,
            "  Attempts: {}{}",
            instruction.attempts_remaining, warning
        )?;
        writeln!(
            self.out,
            "[{}] enter a number, or {} to start over",
            instruction.action_label, RESET_COMMAND
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// JSON lines display, one instruction per line.
pub struct JsonDisplay<W> {
    out: W,
}

impl<W: Write> JsonDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for JsonDisplay<W> {
    fn render(&mut self, instruction: &RenderInstruction) -> Result<()> {
        serde_json::to_writer(&mut self.out, instruction)
            .context("Failed to encode render instruction")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
