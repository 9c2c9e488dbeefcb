//! Operator overloads for transparent error propagation.
//!
//! ## Purpose
//!
//! This module implements the elementary arithmetic overlay: applying
//! `+ - * /` (and unary negation) to quantities, or to a quantity mixed
//! with a plain number, synthesizes a derived quantity with the analytic
//! derivatives of the operation, so composite expressions chain error
//! propagation without the caller constructing derived quantities by hand.
//!
//! ## Design notes
//!
//! * **Operand coercion**: the [`Operand`] sum type distinguishes exact
//!   constants from error-carrying quantities; a bare number becomes a
//!   zero-error quantity before propagation. Right-hand sides are accepted
//!   through `Into<Operand<T>>`, covering `Quantity`, plain numbers and
//!   (by reference or value) `MeasuredQuantity`.
//! * **Scalar left-hand sides** (`2.0 * q`) require concrete impls per
//!   float type because of the orphan rule; they are generated for `f32`
//!   and `f64` by a macro.
//! * Every operator delegates to the fixed-arity propagation helpers in
//!   the engine layer, so the formulas live in one place.
//!
//! ## Operation table
//!
//! ```text
//! add(x,y) = x+y    ∂x = 1      ∂y = 1
//! sub(x,y) = x−y    ∂x = 1      ∂y = −1
//! mul(x,y) = x·y    ∂x = y      ∂y = x
//! div(x,y) = x/y    ∂x = 1/y    ∂y = −x/y²   (y = 0 → ±inf/NaN, no failure)
//! neg(x)   = −x     ∂x = −1
//! ```
//!
//! ## Invariants
//!
//! * Operators never fail: operand errors are already validated, and value
//!   arithmetic follows IEEE float semantics.
//! * Operands are consumed by value (`Quantity` is `Copy`); no operand is
//!   referenced after the operation returns.
//!
//! ## Visibility
//!
//! The operator impls and [`Operand`] are part of the public API.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::engine::derived::{binary, unary};
use crate::engine::measured::MeasuredQuantity;
use crate::engine::quantity::Quantity;
use num_traits::Float;

// ============================================================================
// Operand Coercion
// ============================================================================

/// An arithmetic operand: either an exact constant or an error-carrying
/// quantity.
#[derive(Debug, Clone, Copy)]
pub enum Operand<T> {
    /// A plain number, treated as a quantity with both errors zero.
    Constant(T),

    /// An error-carrying quantity.
    Quantity(Quantity<T>),
}

impl<T: Float> Operand<T> {
    /// Coerce the operand into a quantity.
    #[inline]
    pub fn into_quantity(self) -> Quantity<T> {
        match self {
            Self::Constant(value) => Quantity::exact(value),
            Self::Quantity(quantity) => quantity,
        }
    }
}

impl<T: Float> From<T> for Operand<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

impl<T: Float> From<Quantity<T>> for Operand<T> {
    #[inline]
    fn from(quantity: Quantity<T>) -> Self {
        Self::Quantity(quantity)
    }
}

impl<T: Float> From<&Quantity<T>> for Operand<T> {
    #[inline]
    fn from(quantity: &Quantity<T>) -> Self {
        Self::Quantity(*quantity)
    }
}

impl<T: Float> From<MeasuredQuantity<T>> for Operand<T> {
    #[inline]
    fn from(measured: MeasuredQuantity<T>) -> Self {
        Self::Quantity(measured.quantity())
    }
}

impl<T: Float> From<&MeasuredQuantity<T>> for Operand<T> {
    #[inline]
    fn from(measured: &MeasuredQuantity<T>) -> Self {
        Self::Quantity(measured.quantity())
    }
}

// ============================================================================
// Binary Operators (quantity on the left)
// ============================================================================

impl<T: Float, R: Into<Operand<T>>> Add<R> for Quantity<T> {
    type Output = Quantity<T>;

    fn add(self, rhs: R) -> Quantity<T> {
        let b = rhs.into().into_quantity();
        binary(self, b, self.value() + b.value(), T::one(), T::one())
    }
}

impl<T: Float, R: Into<Operand<T>>> Sub<R> for Quantity<T> {
    type Output = Quantity<T>;

    fn sub(self, rhs: R) -> Quantity<T> {
        let b = rhs.into().into_quantity();
        binary(self, b, self.value() - b.value(), T::one(), -T::one())
    }
}

impl<T: Float, R: Into<Operand<T>>> Mul<R> for Quantity<T> {
    type Output = Quantity<T>;

    fn mul(self, rhs: R) -> Quantity<T> {
        let b = rhs.into().into_quantity();
        binary(self, b, self.value() * b.value(), b.value(), self.value())
    }
}

impl<T: Float, R: Into<Operand<T>>> Div<R> for Quantity<T> {
    type Output = Quantity<T>;

    fn div(self, rhs: R) -> Quantity<T> {
        let b = rhs.into().into_quantity();
        let (x, y) = (self.value(), b.value());
        // y = 0 propagates infinity/NaN per IEEE semantics.
        binary(self, b, x / y, y.recip(), -x / (y * y))
    }
}

impl<T: Float> Neg for Quantity<T> {
    type Output = Quantity<T>;

    fn neg(self) -> Quantity<T> {
        unary(self, -self.value(), -T::one())
    }
}

// ============================================================================
// Scalar Left-Hand Sides
// ============================================================================

macro_rules! impl_scalar_lhs {
    ($($float:ty),*) => {
        $(
            impl Add<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn add(self, rhs: Quantity<$float>) -> Quantity<$float> {
                    Quantity::exact(self) + rhs
                }
            }

            impl Sub<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn sub(self, rhs: Quantity<$float>) -> Quantity<$float> {
                    Quantity::exact(self) - rhs
                }
            }

            impl Mul<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn mul(self, rhs: Quantity<$float>) -> Quantity<$float> {
                    Quantity::exact(self) * rhs
                }
            }

            impl Div<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn div(self, rhs: Quantity<$float>) -> Quantity<$float> {
                    Quantity::exact(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
