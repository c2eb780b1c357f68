// ============================================================================
// Fraction Core Library
// Exact fraction value type with checked arithmetic
// ============================================================================

//! # Fraction Core
//!
//! An exact fraction type that mixes freely with native integers.
//!
//! ## Features
//!
//! - **Exact arithmetic** between fractions and integers, checked for i64 overflow
//! - **No reduction**: `2/4` stays `2/4`, sums use the product of the denominators
//! - **Two operation families**: `checked_*_assign` mutates in place,
//!   `checked_*` returns a new value; native operators wrap both
//! - **Explicit promotion** of integers to `n/1`, floats are rejected as operands
//! - **Float comparisons** against fractions, integers and `f64`
//!
//! ## Example
//!
//! ```rust
//! use fraction_core::prelude::*;
//!
//! let a = Fraction::new(1, 2)?;
//! let b = Fraction::new(1, 4)?;
//!
//! // Denominators multiply, nothing is reduced
//! let sum = a + b;
//! assert_eq!(sum.parts(), [6, 8]);
//! assert_eq!(sum.to_string(), "(6/8)");
//! assert_eq!(sum, 0.75);
//!
//! // Integers are promoted on either side
//! assert_eq!((2i64 * a).to_string(), "(2/2)");
//!
//! // Dividing by a zero-valued fraction is an error, not infinity
//! assert_eq!(a.checked_div(Fraction::new(0, 5)?), Err(NumericError::DivisionByZero));
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        FormatConfig, Fraction, FractionDisplay, Number, NumericError, NumericResult,
    };
}
