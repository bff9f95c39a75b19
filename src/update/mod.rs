//! Update functions for the Elm-style architecture
//!
//! All field state transformations flow through these functions.

mod field;

use crate::commands::Cmd;
use crate::messages::FieldMsg;
use crate::model::FormattedField;

#[cfg(debug_assertions)]
use crate::tracing::FieldSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use field::{update_blur, update_change, update_key_down};

/// Main update function - dispatches to the per-event handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(field: &mut FormattedField, msg: FieldMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(field, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(field, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(field: &mut FormattedField, msg: FieldMsg) -> Option<Cmd> {
    match msg {
        FieldMsg::KeyDown(key) => update_key_down(field, key),
        FieldMsg::Change { text, cursor } => update_change(field, text, cursor),
        FieldMsg::Blur => update_blur(field),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after field state and logs diffs for debugging.
/// Keydowns are frequent and carry no state change beyond the key, so
/// they skip the diff.
#[cfg(debug_assertions)]
fn update_traced(field: &mut FormattedField, msg: FieldMsg) -> Option<Cmd> {
    let msg_name = msg.name();
    let is_noisy = matches!(msg, FieldMsg::KeyDown(_));

    let _span = span!(Level::DEBUG, "update", kind = %field.kind(), msg = msg_name).entered();

    if is_noisy {
        return update_inner(field, msg);
    }

    debug!(target: "message", msg = ?msg, "processing");
    let before = FieldSnapshot::from_field(field);

    let result = update_inner(field, msg);

    let after = FieldSnapshot::from_field(field);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "field", %diff, "state changed");
    }

    field.assert_invariants_with_context(msg_name);

    result
}
