//! Inverse-variance weighted averaging of independent quantities.
//!
//! ## Purpose
//!
//! This module combines a sequence of independent measurements of the same
//! quantity into one, weighting each input inversely to its squared total
//! error so that precise measurements dominate the average.
//!
//! ## Key concepts
//!
//! ### Weighted mean
//!
//! ```text
//! Δx_i = err_sys_i + err_stat_i        (total error)
//! w_i  = 1 / Δx_i²
//! x̄    = Σ(w_i·x_i) / Σw_i
//! Δx̄   = sqrt(1 / Σw_i)
//! ```
//!
//! The combined error `Δx̄` already blends both error components of the
//! inputs; it is stored as the statistical error of the result, with a
//! systematic error of zero.
//!
//! ## Design notes
//!
//! * An input with zero total error has an undefined weight and is rejected
//!   with [`QuantityError::DegenerateWeight`], identifying the offending
//!   element by index. Treating it as an infinitely heavy weight is not
//!   offered.
//! * The result is an independent quantity; no reference to the inputs is
//!   retained.
//!
//! ## Invariants
//!
//! * Input sequence is non-empty and every total error is strictly positive.
//! * A single-element input reproduces that element's value with its total
//!   error.
//!
//! ## Non-goals
//!
//! * No correlated-input weighting; inputs are assumed independent.
//!
//! ## Visibility
//!
//! [`weighted_average`] is part of the public API.

use crate::engine::quantity::Quantity;
use crate::primitives::errors::QuantityError;
use num_traits::Float;

// ============================================================================
// Weighted Average
// ============================================================================

/// Combine independent measurements by inverse-variance weighting.
///
/// # Errors
///
/// * [`QuantityError::EmptyAverage`] for an empty input sequence.
/// * [`QuantityError::DegenerateWeight`] if any input has zero total error.
///
/// # Examples
///
/// ```
/// use errorprop::{weighted_average, Quantity};
///
/// let runs: [Quantity<f64>; 2] = [
///     Quantity::new(9.18, 0.05, 0.0)?,
///     Quantity::new(9.21, 0.05, 0.0)?,
/// ];
/// let combined = weighted_average(&runs)?;
/// assert!((combined.value() - 9.195).abs() < 1e-12);
/// # Ok::<(), errorprop::QuantityError>(())
/// ```
pub fn weighted_average<T: Float>(
    quantities: &[Quantity<T>],
) -> Result<Quantity<T>, QuantityError> {
    if quantities.is_empty() {
        return Err(QuantityError::EmptyAverage);
    }

    let mut weight_sum = T::zero();
    let mut weighted_value_sum = T::zero();

    for (index, quantity) in quantities.iter().enumerate() {
        let total = quantity.total_error();
        if total == T::zero() {
            return Err(QuantityError::DegenerateWeight { index });
        }

        let weight = (total * total).recip();
        weight_sum = weight_sum + weight;
        weighted_value_sum = weighted_value_sum + weight * quantity.value();
    }

    let mean = weighted_value_sum / weight_sum;
    let combined_error = weight_sum.recip().sqrt();

    // The combined error blends both input components; it lands in err_stat.
    Quantity::new(mean, T::zero(), combined_error)
}
