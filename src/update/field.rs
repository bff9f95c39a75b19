//! Field update handlers: keydown, change, and blur transitions

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::cursor::reposition;
use crate::format::{clean, numeric_value, InputFormat, CURRENCY_ZERO};
use crate::keys::Key;
use crate::model::{FieldState, FormattedField};

/// Record the key for the next change event
pub fn update_key_down(field: &mut FormattedField, key: Key) -> Option<Cmd> {
    field.last_key = Some(key);

    match key {
        // Single-line fields never submit the surrounding form
        Key::Enter => Some(Cmd::PreventDefault),
        _ => None,
    }
}

/// Run the clean/format/validate pipeline over the host's edited text
pub fn update_change(
    field: &mut FormattedField,
    text: String,
    cursor: Option<usize>,
) -> Option<Cmd> {
    if text.is_empty() {
        field.state = FieldState::default();
        field.cursor = 0;
        debug!(target: "field", "cleared");
        return Some(Cmd::Emit(field.state.clone()));
    }

    let kind = field.kind();
    let repositioned = reposition(
        &text,
        &field.state.formatted,
        field.last_key,
        cursor,
        field.separator(),
    );

    let canonical = clean(&repositioned.value);
    let formatted = match kind.format(&canonical) {
        Ok(formatted) => formatted,
        Err(err) => {
            warn!(target: "field", %err, text = text.as_str(), "edit rejected");
            // Put the last accepted text and caret back; state stays as it was
            let prior = &field.state.formatted;
            let mut cmds = vec![
                Cmd::Notify(err.user_message().to_string()),
                Cmd::SetText(prior.clone()),
            ];
            if let Some(offset) = cursor {
                cmds.push(Cmd::SetCursor(rejected_edit_offset(offset, prior, &text)));
            }
            return Some(Cmd::batch(cmds));
        }
    };
    let valid = kind.validate(&canonical);
    let numeric = numeric_value(&canonical);

    // Offsets are computed against the formatter output, before "$0" is hidden
    let restored = repositioned
        .cursor
        .map(|offset| restore_offset(offset, &formatted, &text, kind.prefix()));

    let formatted = if formatted == CURRENCY_ZERO {
        String::new()
    } else {
        formatted
    };
    let display_len = formatted.chars().count();

    debug!(
        target: "field",
        canonical = canonical.as_str(),
        formatted = formatted.as_str(),
        valid,
        cursor = ?restored,
        "formatted"
    );

    field.state = FieldState {
        canonical,
        numeric,
        formatted,
        valid,
        error_message: String::new(),
    };

    let mut cmds = vec![Cmd::SetText(field.state.formatted.clone())];
    match restored {
        Some(offset) => {
            field.cursor = offset.min(display_len);
            cmds.push(Cmd::SetCursor(field.cursor));
        }
        None => field.cursor = field.cursor.min(display_len),
    }
    cmds.push(Cmd::Emit(field.state.clone()));

    Some(Cmd::batch(cmds))
}

/// Surface the validation message for the current value
pub fn update_blur(field: &mut FormattedField) -> Option<Cmd> {
    let message = field.kind().error_message(field.state.valid);
    field.state.error_message = message.to_string();
    debug!(target: "field", valid = field.state.valid, error = message, "blurred");
    Some(Cmd::Emit(field.state.clone()))
}

/// Caret to restore after reformatting.
///
/// Shifts the edit offset by however much formatting grew or shrank the
/// text. Anything at or before the start lands just after the prefix.
fn restore_offset(edit_offset: usize, formatted: &str, live: &str, prefix: &str) -> usize {
    let growth = formatted.chars().count() as isize - live.chars().count() as isize;
    let offset = edit_offset as isize + growth;
    if offset <= 0 {
        prefix.chars().count()
    } else {
        offset as usize
    }
}

/// Caret before a rejected edit: undo the edit's growth, within the prior text
fn rejected_edit_offset(edit_offset: usize, prior: &str, live: &str) -> usize {
    let prior_len = prior.chars().count();
    let growth = live.chars().count().saturating_sub(prior_len);
    edit_offset.saturating_sub(growth).min(prior_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_offset_follows_inserted_separator() {
        // "5551" typed at offset 4 becomes "555-1": caret moves past the dash
        assert_eq!(restore_offset(4, "555-1", "5551", ""), 5);
    }

    #[test]
    fn test_restore_offset_follows_removed_separator() {
        // "555-1" minus the "1" is "555-" -> "555": caret pulled back
        assert_eq!(restore_offset(4, "555", "555-", ""), 3);
    }

    #[test]
    fn test_rejected_edit_offset_undoes_insertion() {
        // "555-9|123-4567" rejected: caret goes back in front of the digit
        assert_eq!(rejected_edit_offset(5, "555-123-4567", "555-9123-4567"), 4);
        assert_eq!(rejected_edit_offset(13, "555-123-4567", "555-123-45678"), 12);
        // Pasted run of digits at the start
        assert_eq!(rejected_edit_offset(3, "555-123-4567", "999555-123-4567"), 0);
    }

    #[test]
    fn test_restore_offset_clamps_to_prefix() {
        assert_eq!(restore_offset(0, "$1", "1", "$"), 1);
        assert_eq!(restore_offset(1, "", "$5", "$"), 1);
        assert_eq!(restore_offset(0, "5", "5", ""), 0);
    }

    #[test]
    fn test_key_down_records_key() {
        let mut field = FormattedField::phone_number();
        assert_eq!(update_key_down(&mut field, Key::Backspace), None);
        assert_eq!(field.last_key(), Some(Key::Backspace));
    }

    #[test]
    fn test_enter_prevents_default_and_is_recorded() {
        let mut field = FormattedField::phone_number();
        let cmd = update_key_down(&mut field, Key::Enter).unwrap();
        assert!(cmd.prevents_default());
        assert_eq!(field.last_key(), Some(Key::Enter));
    }
}
