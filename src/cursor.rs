//! Cursor repositioning around group separators.
//!
//! When Backspace or Delete lands directly on a separator the host removes
//! the separator itself, which reformatting immediately puts back: the key
//! appears to do nothing. [`reposition`] detects that case against the text
//! the user was looking at and removes the neighbouring digit instead.
//!
//! All offsets are character indices, not byte indices.

use crate::keys::Key;

/// Edited text and caret after separator correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repositioned {
    pub value: String,
    pub cursor: Option<usize>,
}

/// Correct an edit that deleted "through" a group separator.
///
/// `edited` is the live text after the host applied the keystroke, `prior`
/// is the formatted text shown before it, `cursor` is the caret the host
/// reported after the edit. Returns the input unchanged when there is no
/// prior text or the caret is at (or missing from) the start.
pub fn reposition(
    edited: &str,
    prior: &str,
    last_key: Option<Key>,
    cursor: Option<usize>,
    separator: char,
) -> Repositioned {
    let unchanged = Repositioned {
        value: edited.to_string(),
        cursor,
    };

    let offset = match cursor {
        Some(offset) if offset > 0 && !prior.is_empty() => offset,
        _ => return unchanged,
    };
    if !last_key.is_some_and(Key::is_deletion) {
        return unchanged;
    }

    // Adjacency is judged on the text before the edit
    let separator_at_caret = prior.chars().nth(offset) == Some(separator);
    if !separator_at_caret {
        return unchanged;
    }

    let mut chars: Vec<char> = edited.chars().collect();
    let offset = match last_key {
        Some(Key::Backspace) => {
            remove_at(&mut chars, offset - 1);
            offset - 1
        }
        Some(Key::Delete) => {
            remove_at(&mut chars, offset);
            offset + 1
        }
        _ => return unchanged,
    };

    let value: String = chars.into_iter().collect();
    tracing::debug!(
        target: "cursor",
        key = ?last_key,
        before = edited,
        after = value.as_str(),
        offset,
        "deleted through separator"
    );

    Repositioned {
        value,
        cursor: Some(offset),
    }
}

/// Remove one character; out-of-range indices are ignored
fn remove_at(chars: &mut Vec<char>, index: usize) {
    if index < chars.len() {
        chars.remove(index);
    }
}
