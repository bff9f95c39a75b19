//! Message types for the Elm-style architecture
//!
//! Every host event that can change a field arrives as a [`FieldMsg`].

use crate::keys::Key;

/// Events delivered to a formatted field, in the order the host produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMsg {
    /// A key went down. Recorded for the change event it causes.
    KeyDown(Key),
    /// The host applied an edit to the field's text
    Change {
        /// Live text after the edit
        text: String,
        /// Caret reported by the host after the edit (character offset)
        cursor: Option<usize>,
    },
    /// The field lost focus
    Blur,
}

impl FieldMsg {
    /// Convenience constructor for change events
    pub fn change(text: impl Into<String>, cursor: Option<usize>) -> Self {
        FieldMsg::Change {
            text: text.into(),
            cursor,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            FieldMsg::KeyDown(_) => "KeyDown",
            FieldMsg::Change { .. } => "Change",
            FieldMsg::Blur => "Blur",
        }
    }
}
