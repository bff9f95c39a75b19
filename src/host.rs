//! Host bindings: connect a [`FormattedField`] to a text-entry widget.
//!
//! The field only ever returns [`Cmd`]s. [`FormattedInput`] is the glue
//! that feeds host events in as [`FieldMsg`]s and applies the resulting
//! commands to the widget, the notification surface, and the embedder's
//! emit callback.

use crate::commands::Cmd;
use crate::format::FormatKind;
use crate::keys::Key;
use crate::messages::FieldMsg;
use crate::model::{FieldState, FormattedField};
use crate::update::update;

/// The minimal interface a text-entry widget exposes to a formatted field
pub trait TextHost {
    /// Text currently displayed
    fn text(&self) -> String;

    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Caret as a character offset, if the widget reports one
    fn cursor(&self) -> Option<usize>;

    /// Move the caret to a character offset
    fn set_cursor(&mut self, offset: usize);
}

/// User-facing notification surface (toast, status line, stderr...)
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// In-memory single-line text widget.
///
/// Applies keystrokes the way a browser text input does: printable
/// characters insert at the caret, Backspace removes the character before
/// it, Delete the one after it. Setting the text moves the caret to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    chars: Vec<char>,
    cursor: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget showing `text` with the caret at `cursor` (clamped)
    pub fn with_text(text: &str, cursor: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());
        Self { chars, cursor }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Apply a key's default action. Returns true if the text changed.
    pub fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(ch) => {
                self.chars.insert(self.cursor, ch);
                self.cursor += 1;
                true
            }
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                true
            }
            Key::Delete if self.cursor < self.len() => {
                self.chars.remove(self.cursor);
                true
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            Key::Home => {
                self.cursor = 0;
                false
            }
            Key::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        }
    }
}

impl TextHost for MemoryHost {
    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn set_text(&mut self, text: &str) {
        if self.text() == text {
            return;
        }
        self.chars = text.chars().collect();
        self.cursor = self.len();
    }

    fn cursor(&self) -> Option<usize> {
        Some(self.cursor)
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len());
    }
}

/// A formatted field bound to a host widget, a notifier, and an emit callback.
///
/// `emit` receives `(canonical, numeric, formatted, valid, error_message)`
/// synchronously at the end of every state transition.
pub struct FormattedInput<H, N, E> {
    field: FormattedField,
    host: H,
    notifier: N,
    emit: E,
}

impl<H, N, E> FormattedInput<H, N, E>
where
    H: TextHost,
    N: Notifier,
    E: FnMut(&str, f64, &str, bool, &str),
{
    pub fn new(kind: FormatKind, separator: char, host: H, notifier: N, emit: E) -> Self {
        Self::from_field(FormattedField::new(kind, separator), host, notifier, emit)
    }

    pub fn from_field(field: FormattedField, host: H, notifier: N, emit: E) -> Self {
        Self {
            field,
            host,
            notifier,
            emit,
        }
    }

    pub fn field(&self) -> &FormattedField {
        &self.field
    }

    pub fn state(&self) -> &FieldState {
        self.field.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Deliver a keydown. Returns true if the host should cancel the key's
    /// default action.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.dispatch(FieldMsg::KeyDown(key))
    }

    /// Deliver a change event using the host's current text and caret
    pub fn changed(&mut self) {
        let msg = FieldMsg::Change {
            text: self.host.text(),
            cursor: self.host.cursor(),
        };
        self.dispatch(msg);
    }

    /// Deliver a focus-loss event
    pub fn blur(&mut self) {
        self.dispatch(FieldMsg::Blur);
    }

    fn dispatch(&mut self, msg: FieldMsg) -> bool {
        let mut prevented = false;
        if let Some(cmd) = update(&mut self.field, msg) {
            for cmd in cmd.into_vec() {
                prevented |= self.perform(cmd);
            }
        }
        prevented
    }

    fn perform(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None | Cmd::Batch(_) => {}
            Cmd::SetText(text) => self.host.set_text(&text),
            Cmd::SetCursor(offset) => self.host.set_cursor(offset),
            Cmd::Emit(state) => (self.emit)(
                &state.canonical,
                state.numeric,
                &state.formatted,
                state.valid,
                &state.error_message,
            ),
            Cmd::Notify(message) => self.notifier.notify(&message),
            Cmd::PreventDefault => return true,
        }
        false
    }
}

impl<N, E> FormattedInput<MemoryHost, N, E>
where
    N: Notifier,
    E: FnMut(&str, f64, &str, bool, &str),
{
    /// Press a key: keydown, the widget's default action, then the change
    /// event if the text changed. Tab moves focus away and blurs the field.
    pub fn press(&mut self, key: Key) {
        let prevented = self.key_down(key);
        if key == Key::Tab {
            self.blur();
            return;
        }
        if !prevented && self.host.apply_key(key) {
            self.changed();
        }
    }

    /// Press each character of `text` in turn
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(Key::Char(ch));
        }
    }

    /// Put the caret at `offset` without editing
    pub fn place_cursor(&mut self, offset: usize) {
        self.host.set_cursor(offset);
    }
}

impl<H: std::fmt::Debug, N, E> std::fmt::Debug for FormattedInput<H, N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormattedInput")
            .field("field", &self.field)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
