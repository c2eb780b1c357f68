// ============================================================================
// Number
// Dynamically typed operand and its promotion to Fraction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use std::fmt;

/// A numeric operand whose type is only known at runtime.
///
/// Every mixed-operand operation on [`Fraction`] accepts `impl Into<Number>`
/// and runs [`Number::promote`] first, so integers and fractions mix freely
/// while floats are rejected with a `TypeMismatch` instead of being rounded
/// into a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Native integer, promoted to `n/1`
    Integer(i64),
    /// Floating-point value, only accepted where a float coercion is enough
    Float(f64),
    /// An existing fraction
    Fraction(Fraction),
}

impl Number {
    /// Promote to a fraction.
    ///
    /// `argument` names the operand in the `TypeMismatch` error.
    pub fn promote(self, argument: &'static str) -> NumericResult<Fraction> {
        match self {
            Number::Integer(n) => Ok(Fraction::whole(n)),
            Number::Fraction(f) => Ok(f),
            Number::Float(value) => {
                tracing::debug!(argument, value, "rejected float operand");
                Err(NumericError::type_mismatch(
                    argument,
                    "an integer or a fraction",
                ))
            },
        }
    }

    /// Extract an integer, rejecting floats and fractions.
    pub fn integer(self, argument: &'static str) -> NumericResult<i64> {
        match self {
            Number::Integer(n) => Ok(n),
            other => {
                tracing::debug!(argument, operand = %other, "rejected non-integer operand");
                Err(NumericError::type_mismatch(argument, "an integer"))
            },
        }
    }

    /// Float coercion used by comparisons.
    #[inline]
    pub fn to_real(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(x) => x,
            Number::Fraction(f) => f.to_real(),
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl From<Fraction> for Number {
    #[inline]
    fn from(f: Fraction) -> Self {
        Number::Fraction(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
            Number::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}
