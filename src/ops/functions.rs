//! Elementary function wrappers with analytic derivatives.
//!
//! ## Purpose
//!
//! This module extends the arithmetic overlay with the element-wise
//! transcendental and power operations used in array-style computation.
//! Each method constructs a one-argument derived quantity from the standard
//! calculus derivative evaluated at the operand value.
//!
//! ## Operation table
//!
//! ```text
//! powf(p) = x^p     ∂x = p·x^(p−1)        (constant real exponent)
//! recip() = 1/x     ∂x = −1/x²
//! sqrt()  = √x      ∂x = 1/(2√x)
//! cbrt()  = ∛x      ∂x = ∛x/(3x)
//! exp()   = eˣ      ∂x = eˣ
//! ln()    = ln x    ∂x = 1/x
//! log10() = log₁₀x  ∂x = 1/(x·ln 10)
//! sin()   = sin x   ∂x = cos x
//! cos()   = cos x   ∂x = −sin x
//! tan()   = tan x   ∂x = 1/cos²x
//! ```
//!
//! ## Design notes
//!
//! * Out-of-domain arguments (negative under `sqrt`/`ln`, zero under
//!   `recip`) follow IEEE float semantics: the value and the propagated
//!   errors become infinity/NaN, and no operation fails. Element-wise use
//!   over a sequence therefore never aborts a whole batch.
//! * Additional entries follow the same one-argument pattern and can be
//!   added without altering the design.
//!
//! ## Visibility
//!
//! All methods are part of the public API on [`Quantity`].

use crate::engine::derived::unary;
use crate::engine::quantity::Quantity;
use num_traits::Float;

// ============================================================================
// Power and Reciprocal
// ============================================================================

impl<T: Float> Quantity<T> {
    /// Raise to a constant real exponent: `x^p`, derivative `p·x^(p−1)`.
    ///
    /// The exponent is exact; it contributes no error of its own.
    pub fn powf(self, exponent: T) -> Self {
        let x = self.value();
        unary(
            self,
            x.powf(exponent),
            exponent * x.powf(exponent - T::one()),
        )
    }

    /// Raise to a constant integer exponent.
    pub fn powi(self, exponent: i32) -> Self {
        let x = self.value();
        unary(
            self,
            x.powi(exponent),
            T::from(exponent).unwrap() * x.powi(exponent - 1),
        )
    }

    /// Reciprocal: `1/x`, derivative `−1/x²`.
    pub fn recip(self) -> Self {
        let x = self.value();
        unary(self, x.recip(), -(x * x).recip())
    }

    // ========================================================================
    // Roots and Exponentials
    // ========================================================================

    /// Square root: `√x`, derivative `1/(2√x)`.
    pub fn sqrt(self) -> Self {
        let root = self.value().sqrt();
        unary(self, root, (T::from(2).unwrap() * root).recip())
    }

    /// Cube root: `∛x`, derivative `∛x/(3x)`.
    ///
    /// Defined for negative arguments, like `Float::cbrt`.
    pub fn cbrt(self) -> Self {
        let x = self.value();
        let root = x.cbrt();
        unary(self, root, root / (T::from(3).unwrap() * x))
    }

    /// Natural exponential: `eˣ`, its own derivative.
    pub fn exp(self) -> Self {
        let e = self.value().exp();
        unary(self, e, e)
    }

    /// Natural logarithm: `ln x`, derivative `1/x`.
    pub fn ln(self) -> Self {
        let x = self.value();
        unary(self, x.ln(), x.recip())
    }

    /// Base-10 logarithm: `log₁₀ x`, derivative `1/(x·ln 10)`.
    pub fn log10(self) -> Self {
        let x = self.value();
        unary(self, x.log10(), (x * T::from(10).unwrap().ln()).recip())
    }

    // ========================================================================
    // Trigonometric
    // ========================================================================

    /// Sine, derivative `cos x`.
    pub fn sin(self) -> Self {
        let x = self.value();
        unary(self, x.sin(), x.cos())
    }

    /// Cosine, derivative `−sin x`.
    pub fn cos(self) -> Self {
        let x = self.value();
        unary(self, x.cos(), -x.sin())
    }

    /// Tangent, derivative `1/cos²x`.
    pub fn tan(self) -> Self {
        let x = self.value();
        let c = x.cos();
        unary(self, x.tan(), (c * c).recip())
    }
}
