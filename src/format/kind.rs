//! Format kinds and the formatting/validation interface they share.

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::{ConstructionError, FormatError};
use super::phone::PhoneNumber;

/// Formatting and validation rules for one kind of masked input.
///
/// Implementations receive canonical values only: strings made of ASCII
/// decimal digits, as produced by [`clean`](super::clean).
pub trait InputFormat {
    /// Render a canonical value as display text
    fn format(&self, canonical: &str) -> Result<String, FormatError>;

    /// Whether a canonical value is acceptable as a final entry
    fn validate(&self, canonical: &str) -> bool;

    /// Message shown on blur; empty when the value is valid
    fn error_message(&self, valid: bool) -> &'static str;

    /// Fixed text rendered before the first digit
    fn prefix(&self) -> &'static str {
        ""
    }

    /// Hint text for an empty field
    fn placeholder(&self) -> &'static str;
}

/// Which formatting rules a field uses. Fixed for the field's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Currency,
    PhoneNumber,
}

impl FormatKind {
    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Currency => "currency",
            FormatKind::PhoneNumber => "phoneNumber",
        }
    }

    fn rules(&self) -> &'static dyn InputFormat {
        match self {
            FormatKind::Currency => &Currency,
            FormatKind::PhoneNumber => &PhoneNumber,
        }
    }
}

impl InputFormat for FormatKind {
    fn format(&self, canonical: &str) -> Result<String, FormatError> {
        debug_assert!(
            canonical.bytes().all(|b| b.is_ascii_digit()),
            "format called with non-canonical value {:?}",
            canonical
        );
        self.rules().format(canonical)
    }

    fn validate(&self, canonical: &str) -> bool {
        self.rules().validate(canonical)
    }

    fn error_message(&self, valid: bool) -> &'static str {
        self.rules().error_message(valid)
    }

    fn prefix(&self) -> &'static str {
        self.rules().prefix()
    }

    fn placeholder(&self) -> &'static str {
        self.rules().placeholder()
    }
}

impl FromStr for FormatKind {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "currency" => Ok(FormatKind::Currency),
            "phoneNumber" => Ok(FormatKind::PhoneNumber),
            other => Err(ConstructionError::UnknownFormatKind(other.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a canonical value with the rules of `kind`
pub fn format(canonical: &str, kind: FormatKind) -> Result<String, FormatError> {
    kind.format(canonical)
}

/// Validate a canonical value with the rules of `kind`
pub fn validate(canonical: &str, kind: FormatKind) -> bool {
    kind.validate(canonical)
}

/// Blur-time message for `kind` given the current validity
pub fn error_message(kind: FormatKind, valid: bool) -> &'static str {
    kind.error_message(valid)
}
