// ============================================================================
// Fraction
// Exact numerator/denominator value type with checked arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::{FormatConfig, FractionDisplay};
use super::number::Number;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// A fraction stored as an `i64` numerator over a nonzero `i64` denominator.
///
/// Fractions are never reduced: `2/4` stays `2/4`, and every addition
/// multiplies the denominators together. The only normalization is the sign
/// rule: when both parts are negative they are both flipped to positive.
/// A single negative sign is kept where it was given.
///
/// Arithmetic between fractions is exact (or fails with `Overflow`).
/// Comparisons and conversions to `f64` go through [`Fraction::to_real`],
/// which is exact only while both parts fit in the 53-bit `f64` mantissa.
///
/// # Operation families
/// - `checked_*_assign` mutate the receiver and hand it back, for chained
///   accumulation. On error the receiver is left untouched.
/// - `checked_*` copy the receiver, run the mutating form on the copy and
///   return it. The `checked_r*` forms are the reflected variants used when
///   the fraction is the right-hand operand.
///
/// The mutating family takes `&mut self`, so concurrent mutation from several
/// threads needs external synchronization supplied by the caller.
///
/// # Example
/// ```
/// use fraction_core::numeric::Fraction;
///
/// let mut total = Fraction::new(1, 2)?;
/// total.checked_add_assign(Fraction::new(1, 3)?)?.checked_add_assign(1)?;
/// assert_eq!(total.parts(), [11, 6]);
/// assert_eq!(total.to_string(), "(11/6)");
/// # Ok::<(), fraction_core::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[cold]
fn overflow(op: &'static str) -> NumericError {
    tracing::debug!(op, "fraction arithmetic overflow");
    NumericError::Overflow
}

// 0, 1 and -1 stay in range for any exponent; everything else overflows
// long before the exponent leaves u32.
fn checked_ipow(base: i64, exponent: u64) -> NumericResult<i64> {
    match base {
        0 if exponent == 0 => Ok(1),
        0 | 1 => Ok(base),
        -1 if exponent % 2 == 0 => Ok(1),
        -1 => Ok(-1),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|exponent| base.checked_pow(exponent))
            .ok_or_else(|| overflow("pow")),
    }
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self::whole(0);

    /// One (1/1)
    pub const ONE: Self = Self::whole(1);

    /// Number of parts yielded when a fraction is iterated or unpacked.
    pub const PARTS: usize = 2;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from a numerator and a denominator.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` if both parts are negative and one of them is `i64::MIN`
    pub fn new(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if denominator == 0 {
            tracing::debug!(numerator, "rejected zero denominator");
            return Err(NumericError::DivisionByZero);
        }
        Self::normalized(numerator, denominator)
    }

    /// Create a whole number `n/1`.
    #[inline]
    pub const fn whole(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Create a fraction from dynamically typed parts.
    ///
    /// A fraction given as `numerator` is copied and `denominator` is ignored.
    /// Otherwise both parts must be integers.
    ///
    /// # Errors
    /// - `TypeMismatch` naming "numerator" or "denominator"
    /// - everything [`Fraction::new`] returns
    pub fn try_new(
        numerator: impl Into<Number>,
        denominator: impl Into<Number>,
    ) -> NumericResult<Self> {
        match numerator.into() {
            Number::Fraction(f) => Ok(f),
            other => {
                let numerator = other.integer("numerator")?;
                let denominator = denominator.into().integer("denominator")?;
                Self::new(numerator, denominator)
            },
        }
    }

    // Both-negative pairs flip to positive; the denominator is known nonzero.
    fn normalized(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if numerator < 0 && denominator < 0 {
            let numerator = numerator.checked_neg().ok_or_else(|| overflow("normalize"))?;
            let denominator = denominator
                .checked_neg()
                .ok_or_else(|| overflow("normalize"))?;
            return Ok(Self {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        (self.numerator < 0) != (self.denominator < 0) && self.numerator != 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        (self.numerator < 0) == (self.denominator < 0) && self.numerator != 0
    }

    /// Floating-point approximation `numerator / denominator`.
    ///
    /// Every comparison and every conversion to a plain number goes through
    /// this value. Parts beyond 2^53 in magnitude lose precision here.
    #[inline]
    pub fn to_real(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    // ========================================================================
    // Mutating Arithmetic
    // ========================================================================

    /// Add an integer or a fraction in place.
    ///
    /// The common denominator is the plain product of both denominators,
    /// not their least common multiple.
    ///
    /// # Errors
    /// - `TypeMismatch` if `rhs` is a float
    /// - `Overflow` if an intermediate product leaves the range of i64
    pub fn checked_add_assign(&mut self, rhs: impl Into<Number>) -> NumericResult<&mut Self> {
        let other = rhs.into().promote("value to add")?;

        let common = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or_else(|| overflow("add"))?;
        let lhs = self
            .numerator
            .checked_mul(common / self.denominator)
            .ok_or_else(|| overflow("add"))?;
        let rhs = other
            .numerator
            .checked_mul(common / other.denominator)
            .ok_or_else(|| overflow("add"))?;
        let numerator = lhs.checked_add(rhs).ok_or_else(|| overflow("add"))?;

        *self = Self::normalized(numerator, common)?;
        Ok(self)
    }

    /// Subtract an integer or a fraction in place, as addition of its negation.
    ///
    /// A subtrahend with numerator `i64::MIN` has no negation in i64, so
    /// `(i64::MAX + 1)/d` is added as `i64::MAX/d` followed by `1/d`.
    pub fn checked_sub_assign(&mut self, rhs: impl Into<Number>) -> NumericResult<&mut Self> {
        let other = rhs.into().promote("value to subtract")?;

        let mut out = *self;
        if other.numerator == i64::MIN {
            out.checked_add_assign(Self::new(i64::MAX, other.denominator)?)?
                .checked_add_assign(Self::new(1, other.denominator)?)?;
        } else {
            out.checked_add_assign(other.checked_neg()?)?;
        }

        *self = out;
        Ok(self)
    }

    /// Multiply by an integer or a fraction in place.
    ///
    /// Numerators and denominators are multiplied elementwise.
    pub fn checked_mul_assign(&mut self, rhs: impl Into<Number>) -> NumericResult<&mut Self> {
        let other = rhs.into().promote("value to multiply")?;

        let numerator = self
            .numerator
            .checked_mul(other.numerator)
            .ok_or_else(|| overflow("mul"))?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or_else(|| overflow("mul"))?;

        *self = Self::normalized(numerator, denominator)?;
        Ok(self)
    }

    /// Divide by an integer or a fraction in place, as multiplication by its
    /// reciprocal.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero (the reciprocal would get a zero
    /// denominator).
    pub fn checked_div_assign(&mut self, rhs: impl Into<Number>) -> NumericResult<&mut Self> {
        let divisor = rhs.into().promote("value to divide")?.recip()?;
        self.checked_mul_assign(divisor)
    }

    // ========================================================================
    // Value Arithmetic
    // ========================================================================

    /// `self + rhs` as a new fraction.
    pub fn checked_add(&self, rhs: impl Into<Number>) -> NumericResult<Self> {
        let mut out = *self;
        out.checked_add_assign(rhs)?;
        Ok(out)
    }

    /// `self - rhs` as a new fraction.
    pub fn checked_sub(&self, rhs: impl Into<Number>) -> NumericResult<Self> {
        let mut out = *self;
        out.checked_sub_assign(rhs)?;
        Ok(out)
    }

    /// `self * rhs` as a new fraction.
    pub fn checked_mul(&self, rhs: impl Into<Number>) -> NumericResult<Self> {
        let mut out = *self;
        out.checked_mul_assign(rhs)?;
        Ok(out)
    }

    /// `self / rhs` as a new fraction.
    pub fn checked_div(&self, rhs: impl Into<Number>) -> NumericResult<Self> {
        let mut out = *self;
        out.checked_div_assign(rhs)?;
        Ok(out)
    }

    /// `lhs + self`. Addition commutes, so this is [`Fraction::checked_add`].
    #[inline]
    pub fn checked_radd(&self, lhs: impl Into<Number>) -> NumericResult<Self> {
        self.checked_add(lhs)
    }

    /// `lhs - self`, computed as `(-self) + lhs`.
    pub fn checked_rsub(&self, lhs: impl Into<Number>) -> NumericResult<Self> {
        let lhs = lhs.into().promote("value to subtract from")?;
        let mut out = self.checked_neg()?;
        out.checked_add_assign(lhs)?;
        Ok(out)
    }

    /// `lhs * self`. Multiplication commutes, so this is [`Fraction::checked_mul`].
    #[inline]
    pub fn checked_rmul(&self, lhs: impl Into<Number>) -> NumericResult<Self> {
        self.checked_mul(lhs)
    }

    /// `lhs / self`, computed as the reciprocal of `self` times `lhs`.
    ///
    /// # Errors
    /// `DivisionByZero` if `self` is zero.
    pub fn checked_rdiv(&self, lhs: impl Into<Number>) -> NumericResult<Self> {
        let lhs = lhs.into().promote("value to divide")?;
        let mut out = self.recip()?;
        out.checked_mul_assign(lhs)?;
        Ok(out)
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Negate the numerator.
    ///
    /// The result goes through the constructor, so `2/-3` negates to `2/3`.
    pub fn checked_neg(&self) -> NumericResult<Self> {
        let numerator = self.numerator.checked_neg().ok_or_else(|| overflow("neg"))?;
        Self::new(numerator, self.denominator)
    }

    /// Absolute value of both parts.
    pub fn checked_abs(&self) -> NumericResult<Self> {
        let numerator = self.numerator.checked_abs().ok_or_else(|| overflow("abs"))?;
        let denominator = self
            .denominator
            .checked_abs()
            .ok_or_else(|| overflow("abs"))?;
        Self::new(numerator, denominator)
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    /// `DivisionByZero` if the numerator is zero.
    pub fn recip(&self) -> NumericResult<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// Raise both parts to an integer power.
    ///
    /// A negative exponent takes the reciprocal first and then raises it to
    /// the absolute exponent, so `(2/3)^-2` is `9/4`.
    ///
    /// # Errors
    /// - `TypeMismatch` if `exponent` is not an integer
    /// - `DivisionByZero` for a negative exponent on a zero fraction
    /// - `Overflow` if a power leaves the range of i64
    pub fn checked_pow(&self, exponent: impl Into<Number>) -> NumericResult<Self> {
        let exponent = exponent.into().integer("exponent")?;
        let base = if exponent < 0 { self.recip()? } else { *self };
        let exponent = exponent.unsigned_abs();

        let numerator = checked_ipow(base.numerator, exponent)?;
        let denominator = checked_ipow(base.denominator, exponent)?;
        Self::new(numerator, denominator)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare against an integer, a float or a fraction through `to_real`.
    #[inline]
    pub fn compare(&self, other: impl Into<Number>) -> Option<Ordering> {
        self.to_real().partial_cmp(&other.into().to_real())
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// `to_real` truncated toward zero.
    ///
    /// # Errors
    /// `Overflow` if the truncated value does not fit in i64.
    pub fn to_integer(&self) -> NumericResult<i64> {
        let truncated = self.to_real().trunc();
        // i64::MAX rounds up to 2^63 as f64
        if truncated >= -(i64::MIN as f64) || truncated < i64::MIN as f64 {
            return Err(overflow("to_integer"));
        }
        Ok(truncated as i64)
    }

    /// `[numerator, denominator]`, in that order.
    #[inline]
    pub const fn parts(&self) -> [i64; Self::PARTS] {
        [self.numerator, self.denominator]
    }

    /// Render with a custom [`FormatConfig`].
    ///
    /// The config is used as given. A separator that [`FormatConfig::validate`]
    /// rejects renders ambiguous text (`3/75` with separator `7` prints
    /// `3775`); use [`Fraction::try_display_with`] for configs that come from
    /// outside the program.
    #[inline]
    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> FractionDisplay<'a> {
        FractionDisplay::new(self, config)
    }

    /// Render with a custom [`FormatConfig`], validating it first.
    pub fn try_display_with<'a>(
        &'a self,
        config: &'a FormatConfig,
    ) -> Result<FractionDisplay<'a>, String> {
        config.validate()?;
        Ok(FractionDisplay::new(self, config))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert from rust_decimal::Decimal as `mantissa / 10^scale`.
    ///
    /// The result is not reduced: `1.25` becomes `125/100`.
    ///
    /// # Errors
    /// `Overflow` if the mantissa or `10^scale` does not fit in i64.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let numerator = i64::try_from(d.mantissa()).map_err(|_| overflow("from_decimal"))?;
        let denominator = 10i64
            .checked_pow(d.scale())
            .ok_or_else(|| overflow("from_decimal"))?;
        Self::new(numerator, denominator)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Non-terminating values are rounded to Decimal's 28 digits.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        Decimal::from(self.numerator)
            .checked_div(Decimal::from(self.denominator))
            .ok_or_else(|| overflow("to_decimal"))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(n: i64) -> Self {
        Self::whole(n)
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(f: Fraction) -> Self {
        f.to_real()
    }
}

impl TryFrom<Fraction> for i64 {
    type Error = NumericError;

    #[inline]
    fn try_from(f: Fraction) -> NumericResult<Self> {
        f.to_integer()
    }
}

impl From<Fraction> for (i64, i64) {
    #[inline]
    fn from(f: Fraction) -> Self {
        (f.numerator, f.denominator)
    }
}

impl IntoIterator for Fraction {
    type Item = i64;
    type IntoIter = std::array::IntoIter<i64, { Fraction::PARTS }>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts().into_iter()
    }
}

impl PartialEq for Fraction {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_real() == other.to_real()
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_real().partial_cmp(&other.to_real())
    }
}

// Scalars compare through the same float coercion, on either side.
macro_rules! impl_scalar_cmp {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Fraction {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.to_real() == *other as f64
            }
        }

        impl PartialEq<Fraction> for $t {
            #[inline]
            fn eq(&self, other: &Fraction) -> bool {
                *self as f64 == other.to_real()
            }
        }

        impl PartialOrd<$t> for Fraction {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.to_real().partial_cmp(&(*other as f64))
            }
        }

        impl PartialOrd<Fraction> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                (*self as f64).partial_cmp(&other.to_real())
            }
        }
    )*};
}

impl_scalar_cmp!(i32, i64, f64);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&FormatConfig::canonical()), f)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Fraction::ZERO.parts(), [0, 1]);
        assert_eq!(Fraction::ONE.parts(), [1, 1]);
        assert_eq!(Fraction::default().parts(), [0, 1]);
        assert_eq!(Fraction::PARTS, 2);
    }

    #[test]
    fn test_sign_normalization() {
        assert_eq!(frac(-2, -3).parts(), [2, 3]);
        assert_eq!(frac(2, -3).parts(), [2, -3]);
        assert_eq!(frac(-2, 3).parts(), [-2, 3]);
    }

    #[test]
    fn test_no_reduction() {
        assert_eq!(frac(2, 4).parts(), [2, 4]);
        assert_eq!(frac(6, 3).to_string(), "(6/3)");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Fraction::new(5, 0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_normalize_overflow() {
        assert_eq!(Fraction::new(i64::MIN, -1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_try_new_types() {
        assert_eq!(
            Fraction::try_new(1.5, 2),
            Err(NumericError::type_mismatch("numerator", "an integer"))
        );
        assert_eq!(
            Fraction::try_new(1, 2.0),
            Err(NumericError::type_mismatch("denominator", "an integer"))
        );
        assert_eq!(
            Fraction::try_new(3, Fraction::ONE),
            Err(NumericError::type_mismatch("denominator", "an integer"))
        );
        assert_eq!(Fraction::try_new(3, 0), Err(NumericError::DivisionByZero));
        assert_eq!(Fraction::try_new(-3, -4).unwrap().parts(), [3, 4]);
    }

    #[test]
    fn test_try_new_copies_fraction() {
        let original = frac(2, 4);
        let mut copy = Fraction::try_new(original, 99).unwrap();
        assert_eq!(copy.parts(), [2, 4]);

        copy.checked_add_assign(1).unwrap();
        assert_eq!(copy.parts(), [6, 4]);
        assert_eq!(original.parts(), [2, 4]);
    }

    #[test]
    fn test_sign_queries() {
        assert!(frac(2, -3).is_negative());
        assert!(frac(-2, 3).is_negative());
        assert!(frac(2, 3).is_positive());
        assert!(!Fraction::ZERO.is_negative());
        assert!(!Fraction::ZERO.is_positive());
        assert!(frac(0, -5).is_zero());
    }

    #[test]
    fn test_add_uses_product_denominator() {
        let sum = frac(1, 2).checked_add(frac(1, 4)).unwrap();
        assert_eq!(sum.parts(), [6, 8]);
        assert_eq!(sum, 0.75);

        let sum = frac(1, 2).checked_add(2).unwrap();
        assert_eq!(sum.parts(), [5, 2]);
    }

    #[test]
    fn test_add_assign_chains() {
        let mut acc = frac(1, 2);
        acc.checked_add_assign(frac(1, 3))
            .unwrap()
            .checked_add_assign(1)
            .unwrap();
        assert_eq!(acc.parts(), [11, 6]);
    }

    #[test]
    fn test_add_rejects_float() {
        let mut f = frac(1, 2);
        assert_eq!(
            f.checked_add_assign(0.5),
            Err(NumericError::type_mismatch("value to add", "an integer or a fraction"))
        );
        assert_eq!(f.parts(), [1, 2]);
    }

    #[test]
    fn test_sub() {
        let diff = frac(3, 4).checked_sub(frac(1, 4)).unwrap();
        assert_eq!(diff.parts(), [8, 16]);
        assert_eq!(diff, 0.5);

        let diff = frac(1, 2).checked_sub(1).unwrap();
        assert_eq!(diff.parts(), [-1, 2]);
    }

    #[test]
    fn test_sub_i64_min() {
        let diff = Fraction::whole(-1).checked_sub(i64::MIN).unwrap();
        assert_eq!(diff.parts(), [i64::MAX, 1]);

        let diff = Fraction::whole(-1).checked_sub(Fraction::whole(i64::MIN)).unwrap();
        assert_eq!(diff.parts(), [i64::MAX, 1]);

        let diff = Fraction::whole(i64::MIN).checked_sub(i64::MIN).unwrap();
        assert_eq!(diff.parts(), [0, 1]);

        let mut f = Fraction::ZERO;
        assert_eq!(f.checked_sub_assign(i64::MIN), Err(NumericError::Overflow));
        assert_eq!(f.parts(), [0, 1]);
    }

    #[test]
    fn test_rsub() {
        // 1 - 1/4
        let diff = frac(1, 4).checked_rsub(1).unwrap();
        assert_eq!(diff.parts(), [3, 4]);

        // 1/2 - 2/3
        let diff = frac(2, 3).checked_rsub(frac(1, 2)).unwrap();
        assert_eq!(diff.parts(), [-1, 6]);
    }

    #[test]
    fn test_mul() {
        let product = frac(2, 3).checked_mul(frac(3, 4)).unwrap();
        assert_eq!(product.parts(), [6, 12]);

        let product = frac(2, 3).checked_mul(3).unwrap();
        assert_eq!(product.parts(), [6, 3]);
        assert_eq!(product.checked_rmul(2).unwrap().parts(), [12, 3]);
    }

    #[test]
    fn test_mul_restores_sign_invariant() {
        let product = frac(2, -3).checked_mul(-1).unwrap();
        assert_eq!(product.parts(), [2, 3]);
    }

    #[test]
    fn test_div() {
        let quotient = frac(1, 2).checked_div(frac(3, 4)).unwrap();
        assert_eq!(quotient.parts(), [4, 6]);

        let quotient = frac(1, 2).checked_div(3).unwrap();
        assert_eq!(quotient.parts(), [1, 6]);
    }

    #[test]
    fn test_div_by_zero() {
        let mut f = frac(1, 2);
        assert_eq!(f.checked_div_assign(0), Err(NumericError::DivisionByZero));
        assert_eq!(
            f.checked_div_assign(frac(0, 5)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(f.parts(), [1, 2]);
    }

    #[test]
    fn test_rdiv() {
        // 3 / (3/4)
        let quotient = frac(3, 4).checked_rdiv(3).unwrap();
        assert_eq!(quotient.parts(), [12, 3]);
        assert_eq!(quotient, 4i64);

        assert_eq!(
            Fraction::ZERO.checked_rdiv(1),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_add_overflow_leaves_receiver() {
        let mut f = frac(1, i64::MAX);
        assert_eq!(
            f.checked_add_assign(frac(1, 2)),
            Err(NumericError::Overflow)
        );
        assert_eq!(f.parts(), [1, i64::MAX]);
    }

    #[test]
    fn test_neg() {
        assert_eq!(frac(2, 3).checked_neg().unwrap().parts(), [-2, 3]);
        assert_eq!(frac(2, -3).checked_neg().unwrap().parts(), [2, 3]);
        assert_eq!(
            Fraction::whole(i64::MIN).checked_neg(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_abs() {
        assert_eq!(frac(-2, 3).checked_abs().unwrap().parts(), [2, 3]);
        assert_eq!(frac(2, -3).checked_abs().unwrap().parts(), [2, 3]);
    }

    #[test]
    fn test_recip() {
        assert_eq!(frac(2, 3).recip().unwrap().parts(), [3, 2]);
        assert_eq!(frac(-2, 3).recip().unwrap().parts(), [3, -2]);
        assert_eq!(frac(0, 3).recip(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_pow() {
        assert_eq!(frac(2, 3).checked_pow(2).unwrap().parts(), [4, 9]);
        assert_eq!(frac(2, 3).checked_pow(0).unwrap().parts(), [1, 1]);
        assert_eq!(frac(-2, 3).checked_pow(3).unwrap().parts(), [-8, 27]);
    }

    #[test]
    fn test_pow_negative_exponent() {
        assert_eq!(frac(2, 3).checked_pow(-2).unwrap().parts(), [9, 4]);
        assert_eq!(
            Fraction::ZERO.checked_pow(-1),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow_errors() {
        assert_eq!(
            frac(2, 3).checked_pow(0.5),
            Err(NumericError::type_mismatch("exponent", "an integer"))
        );
        assert_eq!(
            frac(2, 3).checked_pow(Fraction::ONE),
            Err(NumericError::type_mismatch("exponent", "an integer"))
        );
        assert_eq!(frac(2, 3).checked_pow(64), Err(NumericError::Overflow));
        assert_eq!(
            frac(2, 1).checked_pow(1i64 << 32),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            frac(1, 2).checked_pow(-(1i64 << 32)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_pow_unit_and_zero_bases_with_huge_exponents() {
        let big = 1i64 << 32;

        assert_eq!(frac(1, 1).checked_pow(i64::MAX).unwrap().parts(), [1, 1]);
        assert_eq!(frac(1, 1).checked_pow(big).unwrap().parts(), [1, 1]);
        assert_eq!(frac(-1, 1).checked_pow(big).unwrap().to_string(), "(1)");
        assert_eq!(frac(-1, 1).checked_pow(big + 1).unwrap().parts(), [-1, 1]);
        assert_eq!(frac(1, -1).checked_pow(big + 1).unwrap().parts(), [1, -1]);
        assert_eq!(Fraction::ZERO.checked_pow(big).unwrap().to_string(), "(0)");
        assert_eq!(frac(-1, 1).checked_pow(i64::MIN).unwrap().parts(), [1, 1]);
        assert_eq!(
            Fraction::ZERO.checked_pow(-big),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_comparison() {
        assert!(frac(1, 2) < frac(2, 3));
        assert!(frac(2, 3) >= frac(4, 6));
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_ne!(frac(1, 3), frac(1, 2));

        assert_eq!(frac(3, 4), 0.75);
        assert!(frac(7, 2) > 3i64);
        assert!(3i64 < frac(7, 2));
        assert!(0.5 <= frac(1, 2));
        assert_eq!(frac(2, -3).compare(0), Some(Ordering::Less));
        assert_eq!(frac(1, 2).compare(frac(2, 4)), Some(Ordering::Equal));
    }

    #[test]
    fn test_to_integer_truncates_toward_zero() {
        assert_eq!(frac(7, 2).to_integer(), Ok(3));
        assert_eq!(frac(-7, 2).to_integer(), Ok(-3));
        assert_eq!(i64::try_from(frac(7, -2)), Ok(-3));
        assert_eq!(Fraction::whole(i64::MAX).to_integer(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_real() {
        assert_eq!(f64::from(frac(3, 4)), 0.75);
        assert_eq!(frac(1, -4).to_real(), -0.25);
    }

    #[test]
    fn test_unpacking() {
        let (n, d): (i64, i64) = frac(3, 4).into();
        assert_eq!((n, d), (3, 4));

        let parts: Vec<i64> = frac(2, -5).into_iter().collect();
        assert_eq!(parts, vec![2, -5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::whole(6).to_string(), "(6)");
        assert_eq!(frac(3, 4).to_string(), "(3/4)");
        assert_eq!(frac(-3, 4).to_string(), "(-3/4)");
        assert_eq!(format!("{:?}", frac(3, 4)), "Fraction(3/4)");
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(125, 2); // 1.25
        let f = Fraction::from_decimal(d).unwrap();
        assert_eq!(f.parts(), [125, 100]);

        let f = Fraction::from_decimal(Decimal::from(-7)).unwrap();
        assert_eq!(f.parts(), [-7, 1]);
    }

    #[test]
    fn test_to_decimal() {
        let d = frac(3, 4).to_decimal().unwrap();
        assert_eq!(d, Decimal::new(75, 2));
    }
}
