// ============================================================================
// Operator Overloads
// Native operators over Fraction and i64 operands
// ============================================================================
//
// Every operator delegates to the matching checked method and panics on
// error, like the native integer operators do on overflow or division by
// zero. Use the checked_* methods where a panic is not acceptable.

use super::fraction::Fraction;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    (
        $Op:ident :: $op:ident,
        $OpAssign:ident :: $op_assign:ident,
        $checked:ident,
        $checked_assign:ident,
        $reflected:ident,
        $msg:literal
    ) => {
        impl $Op for Fraction {
            type Output = Fraction;

            #[inline]
            fn $op(self, rhs: Fraction) -> Fraction {
                self.$checked(rhs).expect($msg)
            }
        }

        impl $Op<i64> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $op(self, rhs: i64) -> Fraction {
                self.$checked(rhs).expect($msg)
            }
        }

        impl $Op<Fraction> for i64 {
            type Output = Fraction;

            #[inline]
            fn $op(self, rhs: Fraction) -> Fraction {
                rhs.$reflected(self).expect($msg)
            }
        }

        impl $OpAssign for Fraction {
            #[inline]
            fn $op_assign(&mut self, rhs: Fraction) {
                self.$checked_assign(rhs).expect($msg);
            }
        }

        impl $OpAssign<i64> for Fraction {
            #[inline]
            fn $op_assign(&mut self, rhs: i64) {
                self.$checked_assign(rhs).expect($msg);
            }
        }
    };
}

impl_binary_op!(
    Add::add,
    AddAssign::add_assign,
    checked_add,
    checked_add_assign,
    checked_radd,
    "fraction addition failed"
);

impl_binary_op!(
    Sub::sub,
    SubAssign::sub_assign,
    checked_sub,
    checked_sub_assign,
    checked_rsub,
    "fraction subtraction failed"
);

impl_binary_op!(
    Mul::mul,
    MulAssign::mul_assign,
    checked_mul,
    checked_mul_assign,
    checked_rmul,
    "fraction multiplication failed"
);

impl_binary_op!(
    Div::div,
    DivAssign::div_assign,
    checked_div,
    checked_div_assign,
    checked_rdiv,
    "fraction division failed"
);

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("fraction negation overflow")
    }
}
