//! Canonical digit extraction, display formatting, and validation.
//!
//! Every keystroke runs the same three pure steps:
//!
//! - [`clean`]: reduce the live field text to its canonical digits
//! - [`format`]: render those digits for display according to a [`FormatKind`]
//! - [`validate`]: decide whether the digits form an acceptable entry
//!
//! # Example
//!
//! ```
//! use masked_input::format::{clean, format, validate, FormatKind};
//!
//! let digits = clean("555-123-45679");
//! assert!(format(&digits, FormatKind::PhoneNumber).is_err());
//!
//! let digits = clean("555-123-4567");
//! assert_eq!(format(&digits, FormatKind::PhoneNumber).unwrap(), "555-123-4567");
//! assert!(validate(&digits, FormatKind::PhoneNumber));
//! ```

mod currency;
mod digits;
mod error;
mod kind;
mod phone;

pub use currency::{Currency, CURRENCY_GROUP_SEPARATOR, CURRENCY_SYMBOL, CURRENCY_ZERO};
pub use digits::{clean, is_canonical_char, numeric_value};
pub use error::{ConstructionError, FormatError, PHONE_OVERFLOW_NOTICE};
pub use kind::{error_message, format, validate, FormatKind, InputFormat};
pub use phone::{PhoneNumber, PHONE_DIGITS, PHONE_SEPARATOR};
