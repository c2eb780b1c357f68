// ============================================================================
// Numeric Module
// Exact fraction arithmetic over mixed integer and fraction operands
// ============================================================================
//
// This module provides:
// - Fraction: numerator/denominator value type, never reduced
// - Number: runtime-typed operand with explicit promotion to Fraction
// - FormatConfig: rendering options for fractions
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - Arithmetic stays exact; only comparisons go through f64
// - Checked methods return Result, operators panic like native integers
// - i64 storage with overflow checks instead of wraparound

mod errors;
mod format;
mod fraction;
mod number;
mod ops;

pub use errors::{NumericError, NumericResult};
pub use format::{FormatConfig, FractionDisplay};
pub use fraction::Fraction;
pub use number::Number;
