//! Input validation for quantity construction and aggregation.
//!
//! ## Purpose
//!
//! This module centralizes the construction-time precondition checks for the
//! crate. It ensures invalid inputs are rejected at the point of
//! construction with a descriptive [`QuantityError`], never deferred to
//! first use.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation encountered.
//! * All checks are generic over `Float` types to support f32 and f64.
//! * Bounds checks are written in negated form (`!(x >= 0)`) so a NaN
//!   magnitude fails the same check as a negative one.
//! * Error messages include the offending value or index for debugging.
//!
//! ## Validated preconditions
//!
//! * **Error magnitudes**: non-negative (and not NaN)
//! * **Sample sequences**: non-empty
//! * **Sigma interval**: positive and finite
//! * **Derived arity**: one partial derivative per operand, at least one operand
//! * **Broadcast**: per-element error sequences match the data length
//! * **Averaging**: non-empty input, no zero total-error element
//!
//! ## Non-goals
//!
//! * This module does not validate computed values: arithmetic over already
//!   constructed quantities follows IEEE float semantics and never fails.
//! * This module does not transform or correct inputs.
//!
//! ## Visibility
//!
//! Internal implementation detail used by the constructors; not part of the
//! public API.

use crate::primitives::errors::QuantityError;
use num_traits::Float;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for quantity constructors.
///
/// Provides static methods returning `Result<(), QuantityError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate a single error magnitude (systematic or statistical).
    pub fn validate_error_magnitude<T: Float>(
        which: &'static str,
        err: T,
    ) -> Result<(), QuantityError> {
        // Negated comparison also rejects NaN.
        if !(err >= T::zero()) {
            return Err(QuantityError::NegativeError {
                which,
                value: err.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate both error components of a quantity.
    pub fn validate_errors<T: Float>(err_sys: T, err_stat: T) -> Result<(), QuantityError> {
        Self::validate_error_magnitude("err_sys", err_sys)?;
        Self::validate_error_magnitude("err_stat", err_stat)?;
        Ok(())
    }

    /// Validate a raw sample sequence for a measured quantity.
    pub fn validate_measurements<T: Float>(measurements: &[T]) -> Result<(), QuantityError> {
        if measurements.is_empty() {
            return Err(QuantityError::EmptyMeasurements);
        }
        Ok(())
    }

    /// Validate the sigma-interval multiplier.
    pub fn validate_sigma_interval<T: Float>(sigma: T) -> Result<(), QuantityError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(QuantityError::InvalidSigmaInterval(
                sigma.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the partial-derivative/operand arity of a derived quantity.
    pub fn validate_arity(partials: usize, args: usize) -> Result<(), QuantityError> {
        if args == 0 {
            return Err(QuantityError::EmptyArgs);
        }
        if partials != args {
            return Err(QuantityError::ArityMismatch { partials, args });
        }
        Ok(())
    }

    /// Validate a per-element error sequence against the data length.
    pub fn validate_broadcast(expected: usize, got: usize) -> Result<(), QuantityError> {
        if expected != got {
            return Err(QuantityError::BroadcastLength { expected, got });
        }
        Ok(())
    }
}
