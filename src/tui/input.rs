//! Key mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Longest draft the input box accepts.
pub const MAX_DRAFT_LEN: usize = 24;

/// Change to the draft input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftEdit {
    /// Append a character.
    Insert(char),
    /// Remove the last character.
    Backspace,
    /// Remove everything.
    Clear,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Edit the draft.
    Edit(DraftEdit),
    /// Fire the submit control with the draft.
    Submit,
    /// Start a new session.
    Reset,
    /// Leave the application.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key event to an action.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('r') if ctrl => KeyAction::Reset,
        KeyCode::Char('u') if ctrl => KeyAction::Edit(DraftEdit::Clear),
        KeyCode::Char(_) if ctrl => KeyAction::Ignore,
        KeyCode::Char(c) => KeyAction::Edit(DraftEdit::Insert(c)),
        KeyCode::Backspace => KeyAction::Edit(DraftEdit::Backspace),
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// Applies an edit to the draft, respecting [`MAX_DRAFT_LEN`].
pub fn apply_edit(draft: &mut String, edit: DraftEdit) {
    match edit {
        DraftEdit::Insert(c) if draft.chars().count() < MAX_DRAFT_LEN => draft.push(c),
        DraftEdit::Insert(_) => {}
        DraftEdit::Backspace => {
            draft.pop();
        }
        DraftEdit::Clear => draft.clear(),
    }
}
