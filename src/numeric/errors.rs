// ============================================================================
// Numeric Errors
// Error types for fraction construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// An operand had a type outside the accepted set
    TypeMismatch {
        /// Which operand was rejected (e.g. "numerator", "exponent")
        argument: &'static str,
        /// What that operand has to be
        expected: &'static str,
    },
    /// A denominator would have become zero
    DivisionByZero,
    /// Result left the range of i64
    Overflow,
}

impl NumericError {
    pub(crate) const fn type_mismatch(argument: &'static str, expected: &'static str) -> Self {
        NumericError::TypeMismatch { argument, expected }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::TypeMismatch { argument, expected } => {
                write!(f, "type mismatch: {} must be {}", argument, expected)
            },
            NumericError::DivisionByZero => {
                write!(f, "division by zero: denominator must not be zero")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the range of i64")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::type_mismatch("numerator", "an integer").to_string(),
            "type mismatch: numerator must be an integer"
        );
        assert_eq!(
            NumericError::DivisionByZero.to_string(),
            "division by zero: denominator must not be zero"
        );
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded the range of i64"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
        assert_ne!(
            NumericError::type_mismatch("numerator", "an integer"),
            NumericError::type_mismatch("denominator", "an integer")
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::DivisionByZero);
        assert!(err.to_string().starts_with("division by zero"));
    }
}
