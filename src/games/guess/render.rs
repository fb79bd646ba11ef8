//! Render instructions handed to a display surface.

use super::types::{ActionLabel, HighlightColor, StatusText};
use serde::{Deserialize, Serialize};

/// Everything a display needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Status message to show.
    pub status: StatusText,
    /// Guesses in submission order.
    pub history: Vec<i64>,
    /// Guesses joined for display.
    pub history_text: String,
    /// Attempts left this session.
    pub attempts_remaining: u32,
    /// Flag the attempts counter as running low.
    pub low_attempts_warning: bool,
    /// What the next submit will do.
    pub action_label: ActionLabel,
    /// Present only on color cycle ticks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<HighlightColor>,
}

/// Joins guesses the way the history line shows them.
pub(super) fn history_text(history: &[i64]) -> String {
    history
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_text() {
        assert_eq!(history_text(&[]), "");
        assert_eq!(history_text(&[50]), "50");
        assert_eq!(history_text(&[50, 25, -3]), "50, 25, -3");
    }

    #[test]
    fn test_json_omits_missing_highlight() {
        let instruction = RenderInstruction {
            status: StatusText::TooHigh,
            history: vec![50],
            history_text: "50".to_string(),
            attempts_remaining: 6,
            low_attempts_warning: false,
            action_label: ActionLabel::Guess,
            highlight_color: None,
        };
        let json = serde_json::to_value(&instruction).unwrap();
        assert_eq!(json["status"], "TOO_HIGH");
        assert_eq!(json["action_label"], "guess");
        assert!(json.get("highlight_color").is_none());
    }
}
