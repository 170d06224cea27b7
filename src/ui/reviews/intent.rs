use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewIntent {
    /// Append a character to the draft.
    Input(char),
    /// Append pasted text to the draft, line breaks folded to spaces.
    Paste(String),
    /// Delete the last character of the draft.
    Backspace,
    /// Prepend the draft to the list and clear it. Empty drafts are accepted.
    Submit,
}

impl Intent for ReviewIntent {}
