//! Digit extraction: reduce arbitrary field text to its canonical digits.

/// Character filter for canonical values
pub fn is_canonical_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Strip every character that is not a decimal digit, preserving order
pub fn clean(text: &str) -> String {
    text.chars().filter(|&ch| is_canonical_char(ch)).collect()
}

/// Numeric interpretation of a canonical value (empty is zero)
///
/// Canonical values may be longer than any integer type holds, so this
/// returns a float the same way a host number would.
pub fn numeric_value(canonical: &str) -> f64 {
    if canonical.is_empty() {
        return 0.0;
    }
    canonical.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_separators_and_prefix() {
        assert_eq!(clean("$1,234"), "1234");
        assert_eq!(clean("555-123-4567"), "5551234567");
    }

    #[test]
    fn test_clean_empty_and_non_digits() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("abc-$,"), "");
    }

    #[test]
    fn test_clean_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not canonical
        assert_eq!(clean("1\u{0663}2"), "12");
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(""), 0.0);
        assert_eq!(numeric_value("0"), 0.0);
        assert_eq!(numeric_value("007"), 7.0);
        assert_eq!(numeric_value("5551234567"), 5_551_234_567.0);
    }

    #[test]
    fn test_numeric_value_long_input_stays_finite() {
        let long = "9".repeat(40);
        let n = numeric_value(&long);
        assert!(n.is_finite());
        assert!(n > 1e39);
    }
}
