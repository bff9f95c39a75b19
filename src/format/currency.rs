//! Whole-unit currency formatting (`$1,234,567`).

use super::digits::numeric_value;
use super::error::FormatError;
use super::kind::InputFormat;

/// Currency symbol rendered in front of the amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Display of a zero amount; fields show this as an empty box instead
pub const CURRENCY_ZERO: &str = "$0";

/// Thousands separator used when rendering amounts
pub const CURRENCY_GROUP_SEPARATOR: char = ',';

const GROUP_SIZE: usize = 3;

/// Whole-unit dollar amounts with thousands grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Currency;

impl InputFormat for Currency {
    fn format(&self, canonical: &str) -> Result<String, FormatError> {
        if canonical.is_empty() {
            return Ok(String::new());
        }

        let trimmed = canonical.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };

        Ok(format!("{}{}", CURRENCY_SYMBOL, group_thousands(digits)))
    }

    fn validate(&self, canonical: &str) -> bool {
        numeric_value(canonical) >= 1.0
    }

    fn error_message(&self, valid: bool) -> &'static str {
        if valid {
            ""
        } else {
            "Price must be at least $1"
        }
    }

    fn prefix(&self) -> &'static str {
        CURRENCY_SYMBOL
    }

    fn placeholder(&self) -> &'static str {
        "$12,345"
    }
}

/// Insert a separator every three digits counting from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / GROUP_SIZE);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(CURRENCY_GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
