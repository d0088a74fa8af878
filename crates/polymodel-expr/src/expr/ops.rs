//! Operator overloads.
//!
//! `+`, `-` and `*` accept any [`Operand`] on the right of an expression or
//! variable, and plain numbers on the left. `/` is only defined for numeric
//! divisors and returns a `Result` so that division by zero surfaces as
//! [`ExprError::DivisionByZero`]. Comparisons are deliberately not
//! overloaded; use `at_most`, `at_least` and `equal_to`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::core::Expr;
use crate::expr::error::ExprError;
use crate::expr::operand::Operand;
use crate::variable::Variable;

macro_rules! impl_binary_ops {
    ($lhs:ty, |$this:ident| $promote:expr) => {
        impl<R: Into<Operand>> Add<R> for $lhs {
            type Output = Expr;

            fn add(self, rhs: R) -> Self::Output {
                let $this = self;
                $promote.plus(rhs)
            }
        }

        impl<R: Into<Operand>> Sub<R> for $lhs {
            type Output = Expr;

            fn sub(self, rhs: R) -> Self::Output {
                let $this = self;
                $promote.minus(rhs)
            }
        }

        impl<R: Into<Operand>> Mul<R> for $lhs {
            type Output = Expr;

            fn mul(self, rhs: R) -> Self::Output {
                let $this = self;
                $promote.times(rhs)
            }
        }

        impl Div<f64> for $lhs {
            type Output = Result<Expr, ExprError>;

            fn div(self, rhs: f64) -> Self::Output {
                let $this = self;
                $promote.try_div(rhs)
            }
        }

        impl Div<i32> for $lhs {
            type Output = Result<Expr, ExprError>;

            fn div(self, rhs: i32) -> Self::Output {
                let $this = self;
                $promote.try_div(rhs)
            }
        }

        impl Neg for $lhs {
            type Output = Expr;

            fn neg(self) -> Self::Output {
                let $this = self;
                $promote.scale(-1.0)
            }
        }
    };
}

impl_binary_ops!(Expr, |lhs| lhs);
impl_binary_ops!(&Expr, |lhs| lhs);
impl_binary_ops!(Variable, |lhs| lhs.to_expr());
impl_binary_ops!(&Variable, |lhs| lhs.to_expr());

// Commuted forms with a plain number on the left: `2.0 * x`, `1 - e`.
macro_rules! impl_scalar_lhs_ops {
    (@rhs $scalar:ty, $rhs:ty) => {
        impl Add<$rhs> for $scalar {
            type Output = Expr;

            fn add(self, rhs: $rhs) -> Self::Output {
                Operand::from(rhs).into_expr().plus(self)
            }
        }

        impl Sub<$rhs> for $scalar {
            type Output = Expr;

            fn sub(self, rhs: $rhs) -> Self::Output {
                Expr::from_constant(f64::from(self)).minus(rhs)
            }
        }

        impl Mul<$rhs> for $scalar {
            type Output = Expr;

            fn mul(self, rhs: $rhs) -> Self::Output {
                Operand::from(rhs).into_expr().times(self)
            }
        }
    };
    ($($scalar:ty),*) => {$(
        impl_scalar_lhs_ops!(@rhs $scalar, Expr);
        impl_scalar_lhs_ops!(@rhs $scalar, &Expr);
        impl_scalar_lhs_ops!(@rhs $scalar, Variable);
        impl_scalar_lhs_ops!(@rhs $scalar, &Variable);
    )*};
}

impl_scalar_lhs_ops!(f64, i32);
