//! Error types for formatting and field construction

/// User-facing notice shown when a phone number grows past ten digits
pub const PHONE_OVERFLOW_NOTICE: &str = "Phone number can only be 10 digits!";

/// Errors raised while formatting a canonical digit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Phone number has more digits than the mask can hold
    TooManyDigits { count: usize, max: usize },
}

impl FormatError {
    /// Message to hand to the notification surface
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TooManyDigits { .. } => PHONE_OVERFLOW_NOTICE,
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyDigits { count, max } => {
                write!(f, "too many digits ({} digits, max {})", count, max)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised when a field is created with an unusable configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// Format kind name is not one of the known kinds
    UnknownFormatKind(String),
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFormatKind(name) => write!(
                f,
                "format kind must be 'currency' or 'phoneNumber', got '{}'",
                name
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_digits_display() {
        let err = FormatError::TooManyDigits { count: 11, max: 10 };
        assert_eq!(err.to_string(), "too many digits (11 digits, max 10)");
        assert_eq!(err.user_message(), "Phone number can only be 10 digits!");
    }

    #[test]
    fn test_unknown_kind_display() {
        let err = ConstructionError::UnknownFormatKind("zip".to_string());
        assert!(err.to_string().contains("'zip'"));
    }
}
