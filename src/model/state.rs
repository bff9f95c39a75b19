//! FieldState - the values a formatted field reports to its embedder

use serde::Serialize;

/// Snapshot of a field's value, emitted after every state transition.
///
/// Embedders only ever receive copies; the owning
/// [`FormattedField`](super::FormattedField) is the single writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldState {
    /// Digits only, recomputed from the live text on every edit
    pub canonical: String,
    /// Numeric interpretation of `canonical` (0 when empty)
    pub numeric: f64,
    /// Display text shown in the field
    pub formatted: String,
    /// Whether `canonical` passes the field's validator
    pub valid: bool,
    /// Set on blur when invalid, cleared by any edit
    pub error_message: String,
}

impl FieldState {
    /// Whether the host should show the "looks good" indicator
    pub fn shows_valid_indicator(&self) -> bool {
        self.valid
    }

    /// Whether the host should show the error banner
    pub fn shows_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
