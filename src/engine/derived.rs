//! Linear (first-order) error propagation for derived quantities.
//!
//! ## Purpose
//!
//! This module implements the propagation engine: given a value function
//! `f(q1, …, qn)`, one analytic partial derivative per operand and the
//! operand quantities, it computes the derived value and both propagated
//! error magnitudes. The arithmetic overlay (layer 3) funnels every operator
//! invocation through the helpers defined here, so the propagation formulas
//! live in exactly one place.
//!
//! ## Design notes
//!
//! * **Eager**: a derived quantity is evaluated immediately and returned as
//!   a plain [`Quantity`]; no expression graph is retained, and operands are
//!   not referenced after construction.
//! * Functions and derivatives are evaluated at the operand values only
//!   (first-order expansion around the central values).
//! * Value arithmetic follows IEEE float semantics: a zero divisor or an
//!   out-of-domain argument yields infinity/NaN in the result, it never
//!   fails.
//!
//! ## Key concepts
//!
//! ### Propagation formulas
//!
//! For operand values `v = (v1, …, vn)`:
//!
//! ```text
//! value    = f(v)
//! err_sys  = Σ_i |∂f/∂q_i(v) · err_sys_i|        (worst case, terms never cancel)
//! err_stat = sqrt(Σ_i (∂f/∂q_i(v) · err_stat_i)²) (independent, in quadrature)
//! ```
//!
//! ## Invariants
//!
//! * `partial_derivatives.len() == args.len()`, `args` non-empty; violations
//!   fail eagerly with [`QuantityError`].
//! * Propagated error magnitudes are non-negative by construction.
//!
//! ## Non-goals
//!
//! * No symbolic differentiation: derivatives are supplied by the caller or
//!   by the fixed operator table in the ops layer.
//! * No correlated-error propagation: operand errors are assumed
//!   independent.
//!
//! ## Visibility
//!
//! [`Quantity::derived`] is public API; the fixed-arity helpers are internal
//! to the arithmetic overlay.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::engine::quantity::Quantity;
use crate::primitives::errors::QuantityError;
use crate::primitives::validator::Validator;
use num_traits::Float;

// ============================================================================
// General N-ary Construction
// ============================================================================

impl<T: Float> Quantity<T> {
    /// Construct a derived quantity from a value function, its partial
    /// derivatives and the operand quantities.
    ///
    /// Both the value function and each derivative receive the operand
    /// values as a slice in operand order.
    ///
    /// # Errors
    ///
    /// * [`QuantityError::EmptyArgs`] for zero operands.
    /// * [`QuantityError::ArityMismatch`] if the derivative count differs
    ///   from the operand count.
    ///
    /// # Examples
    ///
    /// ```
    /// use errorprop::Quantity;
    ///
    /// // Area of a rectangle: f(w, h) = w * h
    /// let w = Quantity::new(3.0, 0.1, 0.0)?;
    /// let h = Quantity::new(4.0, 0.2, 0.0)?;
    /// let area = Quantity::derived(
    ///     |v| v[0] * v[1],
    ///     &[&|v: &[f64]| v[1], &|v: &[f64]| v[0]],
    ///     &[w, h],
    /// )?;
    /// assert_eq!(area.value(), 12.0);
    /// assert!((area.err_sys() - 1.0).abs() < 1e-12); // |4*0.1| + |3*0.2|
    /// # Ok::<(), errorprop::QuantityError>(())
    /// ```
    pub fn derived<F>(
        value_function: F,
        partial_derivatives: &[&dyn Fn(&[T]) -> T],
        args: &[Quantity<T>],
    ) -> Result<Self, QuantityError>
    where
        F: FnOnce(&[T]) -> T,
    {
        Validator::validate_arity(partial_derivatives.len(), args.len())?;

        let values: Vec<T> = args.iter().map(Quantity::value).collect();

        let mut err_sys = T::zero();
        let mut err_stat_sq = T::zero();
        for (partial, arg) in partial_derivatives.iter().zip(args) {
            let gradient = partial(&values);
            err_sys = err_sys + (gradient * arg.err_sys()).abs();
            let stat_term = gradient * arg.err_stat();
            err_stat_sq = err_stat_sq + stat_term * stat_term;
        }

        Ok(Self::from_propagation(
            value_function(&values),
            err_sys,
            err_stat_sq.sqrt(),
        ))
    }
}

// ============================================================================
// Fixed-Arity Helpers (arithmetic overlay)
// ============================================================================

/// Propagate through a one-operand operation with value `value` and
/// derivative `gradient`, both already evaluated at the operand value.
#[inline]
pub(crate) fn unary<T: Float>(arg: Quantity<T>, value: T, gradient: T) -> Quantity<T> {
    Quantity::from_propagation(
        value,
        (gradient * arg.err_sys()).abs(),
        (gradient * arg.err_stat()).abs(),
    )
}

/// Propagate through a two-operand operation with value `value` and
/// per-operand derivatives `grad_a`/`grad_b`, already evaluated at the
/// operand values.
#[inline]
pub(crate) fn binary<T: Float>(
    a: Quantity<T>,
    b: Quantity<T>,
    value: T,
    grad_a: T,
    grad_b: T,
) -> Quantity<T> {
    let err_sys = (grad_a * a.err_sys()).abs() + (grad_b * b.err_sys()).abs();

    let stat_a = grad_a * a.err_stat();
    let stat_b = grad_b * b.err_stat();
    let err_stat = (stat_a * stat_a + stat_b * stat_b).sqrt();

    Quantity::from_propagation(value, err_sys, err_stat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derived_validates_arity() {
        let q = Quantity::exact(1.0);
        let id = |v: &[f64]| v[0];
        let one = |_: &[f64]| 1.0;

        assert_eq!(
            Quantity::derived(id, &[], &[q]),
            Err(QuantityError::ArityMismatch {
                partials: 0,
                args: 1
            })
        );
        assert_eq!(
            Quantity::derived(id, &[&one], &[]),
            Err(QuantityError::EmptyArgs)
        );
    }

    #[test]
    fn systematic_terms_never_cancel() {
        // f(a, b) = a - b has derivatives 1 and -1; systematic errors must
        // still add in absolute value.
        let a = Quantity::new(5.0, 0.3, 0.0).unwrap();
        let b = Quantity::new(2.0, 0.4, 0.0).unwrap();
        let d = Quantity::derived(
            |v| v[0] - v[1],
            &[&|_: &[f64]| 1.0, &|_: &[f64]| -1.0],
            &[a, b],
        )
        .unwrap();
        assert_relative_eq!(d.value(), 3.0);
        assert_relative_eq!(d.err_sys(), 0.7);
    }

    #[test]
    fn statistical_terms_combine_in_quadrature() {
        let a = Quantity::new(1.0, 0.0, 0.3).unwrap();
        let b = Quantity::new(1.0, 0.0, 0.4).unwrap();
        let d = Quantity::derived(
            |v| v[0] + v[1],
            &[&|_: &[f64]| 1.0, &|_: &[f64]| 1.0],
            &[a, b],
        )
        .unwrap();
        assert_relative_eq!(d.err_stat(), 0.5);
    }

    #[test]
    fn pendulum_gravity_reproduction() {
        // g = 4π²·l/T², ∂g/∂l = 4π²/T², ∂g/∂T = −8π²·l/T³
        let four_pi_sq = 4.0 * core::f64::consts::PI * core::f64::consts::PI;
        let l = Quantity::new(1.84, 0.007, 0.0).unwrap();
        let t = Quantity::new(2.80875, 0.3, 0.100027).unwrap();

        let g = Quantity::derived(
            |v| four_pi_sq * v[0] / (v[1] * v[1]),
            &[
                &|v: &[f64]| four_pi_sq / (v[1] * v[1]),
                &|v: &[f64]| -2.0 * four_pi_sq * v[0] / (v[1] * v[1] * v[1]),
            ],
            &[l, t],
        )
        .unwrap();

        assert_relative_eq!(g.value(), 9.208, max_relative = 1e-3);
        assert_relative_eq!(g.err_sys(), 2.002, max_relative = 1e-3);
        assert_relative_eq!(g.err_stat(), 0.656, max_relative = 1e-3);
    }

    #[test]
    fn value_arithmetic_follows_float_semantics() {
        // Division by an exact zero yields infinity, not a failure.
        let a = Quantity::new(1.0, 0.1, 0.0).unwrap();
        let zero = Quantity::exact(0.0);
        let d = Quantity::derived(
            |v| v[0] / v[1],
            &[
                &|v: &[f64]| 1.0 / v[1],
                &|v: &[f64]| -v[0] / (v[1] * v[1]),
            ],
            &[a, zero],
        )
        .unwrap();
        assert!(d.value().is_infinite());
    }

    #[test]
    fn unary_helper_propagates_both_components() {
        let q = Quantity::new(4.0, 0.2, 0.1).unwrap();
        // f(x) = x² at x = 4: value 16, gradient 8.
        let d = unary(q, 16.0, 8.0);
        assert_relative_eq!(d.err_sys(), 1.6);
        assert_relative_eq!(d.err_stat(), 0.8);
    }
}
