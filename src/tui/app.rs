//! Application state for the terminal front end.

use crate::games::guess::{GameConfiguration, HighlightColor, RenderInstruction};
use crate::session::DisplaySurface;
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input::{DraftEdit, apply_edit};

/// What the terminal shows: the latest instruction plus the draft line.
#[derive(Debug, Getters)]
pub struct TerminalApp {
    config: GameConfiguration,
    instruction: RenderInstruction,
    highlight: Option<HighlightColor>,
    draft: String,
}

impl TerminalApp {
    /// Creates the application showing `instruction`.
    #[instrument(skip_all)]
    pub fn new(config: GameConfiguration, instruction: RenderInstruction) -> Self {
        Self {
            config,
            highlight: instruction.highlight_color,
            instruction,
            draft: String::new(),
        }
    }

    /// Status sentence for the current instruction.
    pub fn status_message(&self) -> String {
        self.instruction.status.message(&self.config)
    }

    /// Edits the draft line.
    pub fn edit(&mut self, edit: DraftEdit) {
        apply_edit(&mut self.draft, edit);
    }

    /// Takes the draft for submission, leaving it empty.
    #[instrument(skip(self))]
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }
}

impl DisplaySurface for TerminalApp {
    fn render(&mut self, instruction: &RenderInstruction) -> anyhow::Result<()> {
        if instruction.highlight_color.is_none() {
            debug!(status = ?instruction.status, "Render instruction received");
        }
        self.highlight = instruction.highlight_color;
        self.instruction = instruction.clone();
        Ok(())
    }
}
