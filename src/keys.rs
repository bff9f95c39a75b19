//! Key names delivered by the host's keydown events
//!
//! Names follow the DOM `KeyboardEvent.key` convention ("Backspace",
//! "ArrowLeft", "a", ...). Only Backspace and Delete change how the
//! next edit is interpreted; everything else passes through.

use std::fmt;

/// A logical key reported by a keydown event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    // Caret movement
    Left,
    Right,
    Home,
    End,

    /// Any named key this crate has no use for
    Unidentified,
}

impl Key {
    /// Parse a DOM key name. Unknown multi-character names map to
    /// [`Key::Unidentified`]; single characters map to [`Key::Char`].
    pub fn from_name(name: &str) -> Key {
        match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Unidentified,
                }
            }
        }
    }

    /// Whether this key removes text next to the caret
    pub fn is_deletion(self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::Char(ch)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Escape"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Left => write!(f, "ArrowLeft"),
            Key::Right => write!(f, "ArrowRight"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Unidentified => write!(f, "Unidentified"),
        }
    }
}
