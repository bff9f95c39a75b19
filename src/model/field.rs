//! FormattedField - per-field state owned by the edit controller

use crate::format::{ConstructionError, FormatKind, InputFormat};
use crate::keys::Key;

use super::state::FieldState;

/// One masked text field: its fixed format, its current state, and the
/// last key pressed. Transitions live in [`crate::update`].
#[derive(Debug, Clone)]
pub struct FormattedField {
    kind: FormatKind,
    separator: char,
    pub(crate) state: FieldState,
    pub(crate) last_key: Option<Key>,
    pub(crate) cursor: usize,
}

impl FormattedField {
    /// Create an empty field
    pub fn new(kind: FormatKind, separator: char) -> Self {
        Self {
            kind,
            separator,
            state: FieldState::default(),
            last_key: None,
            cursor: 0,
        }
    }

    /// Create a field from a format kind name ("currency" or "phoneNumber")
    pub fn from_kind_name(kind: &str, separator: char) -> Result<Self, ConstructionError> {
        Ok(Self::new(kind.parse()?, separator))
    }

    /// Currency field with the conventional `,` separator
    pub fn currency() -> Self {
        Self::new(FormatKind::Currency, ',')
    }

    /// Phone number field with the conventional `-` separator
    pub fn phone_number() -> Self {
        Self::new(FormatKind::PhoneNumber, '-')
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Current state (read-only; embedders get copies through emissions)
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Text the host should currently display
    pub fn formatted(&self) -> &str {
        &self.state.formatted
    }

    /// Key recorded by the most recent keydown
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Caret offset most recently restored onto the host
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Hint text for the empty field
    pub fn placeholder(&self) -> &'static str {
        self.kind.placeholder()
    }

    /// Check internal invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        use crate::format::clean;

        let shown_digits = clean(&self.state.formatted);
        let expected = match self.kind {
            // Leading zeros and the lone "$0" never reach the display
            FormatKind::Currency => self.state.canonical.trim_start_matches('0'),
            FormatKind::PhoneNumber => self.state.canonical.as_str(),
        };
        assert_eq!(
            shown_digits, expected,
            "[{}] formatted {:?} does not carry canonical {:?}",
            context, self.state.formatted, self.state.canonical
        );
        assert_eq!(
            self.state.valid,
            self.kind.validate(&self.state.canonical),
            "[{}] validity out of sync for {:?}",
            context,
            self.state.canonical
        );
        assert!(
            self.cursor <= self.state.formatted.chars().count(),
            "[{}] cursor {} past end of {:?}",
            context,
            self.cursor,
            self.state.formatted
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
