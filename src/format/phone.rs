//! North American phone number formatting (`555-123-4567`).

use super::error::FormatError;
use super::kind::InputFormat;

/// Separator placed between phone number groups
pub const PHONE_SEPARATOR: char = '-';

/// Number of digits in a complete phone number
pub const PHONE_DIGITS: usize = 10;

const AREA_CODE_LEN: usize = 3;
const EXCHANGE_END: usize = 6;

/// Ten-digit phone numbers grouped as `XXX-XXX-XXXX`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneNumber;

impl InputFormat for PhoneNumber {
    fn format(&self, canonical: &str) -> Result<String, FormatError> {
        let len = canonical.chars().count();

        let formatted = match len {
            0 => String::new(),
            1..=3 => canonical.to_string(),
            4..=6 => {
                let (area, rest) = split_chars(canonical, AREA_CODE_LEN);
                format!("{}{}{}", area, PHONE_SEPARATOR, rest)
            }
            7..=PHONE_DIGITS => {
                let (area, rest) = split_chars(canonical, AREA_CODE_LEN);
                let (exchange, line) = split_chars(rest, EXCHANGE_END - AREA_CODE_LEN);
                format!(
                    "{}{sep}{}{sep}{}",
                    area,
                    exchange,
                    line,
                    sep = PHONE_SEPARATOR
                )
            }
            _ => {
                return Err(FormatError::TooManyDigits {
                    count: len,
                    max: PHONE_DIGITS,
                })
            }
        };

        Ok(formatted)
    }

    fn validate(&self, canonical: &str) -> bool {
        canonical.chars().count() == PHONE_DIGITS
    }

    fn error_message(&self, valid: bool) -> &'static str {
        if valid {
            ""
        } else {
            "Phone number must be 10 digits"
        }
    }

    fn placeholder(&self) -> &'static str {
        "123-456-7890"
    }
}

/// Split after `n` characters (not bytes)
fn split_chars(text: &str, n: usize) -> (&str, &str) {
    let at = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    text.split_at(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_by_length() {
        assert_eq!(PhoneNumber.format("").unwrap(), "");
        assert_eq!(PhoneNumber.format("5").unwrap(), "5");
        assert_eq!(PhoneNumber.format("555").unwrap(), "555");
        assert_eq!(PhoneNumber.format("5551").unwrap(), "555-1");
        assert_eq!(PhoneNumber.format("555123").unwrap(), "555-123");
        assert_eq!(PhoneNumber.format("5551234").unwrap(), "555-123-4");
        assert_eq!(PhoneNumber.format("5551234567").unwrap(), "555-123-4567");
    }

    #[test]
    fn test_format_rejects_eleventh_digit() {
        let err = PhoneNumber.format("55512345678").unwrap_err();
        assert_eq!(err, FormatError::TooManyDigits { count: 11, max: 10 });
    }

    #[test]
    fn test_validate_exactly_ten_digits() {
        assert!(!PhoneNumber.validate(""));
        assert!(!PhoneNumber.validate("555123456"));
        assert!(PhoneNumber.validate("5551234567"));
        assert!(!PhoneNumber.validate("55512345678"));
    }

    #[test]
    fn test_format_groups_by_character() {
        // Only digits reach the formatter from a field; wider input must not panic
        assert_eq!(PhoneNumber.format("５５５1").unwrap(), "５５５-1");
        assert_eq!(PhoneNumber.format("ab€defg").unwrap(), "ab€-def-g");
        assert!(PhoneNumber.validate("555123456€"));
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(PhoneNumber.prefix(), "");
    }
}
