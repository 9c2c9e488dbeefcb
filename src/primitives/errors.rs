//! Shared error types for quantity construction and aggregation.
//!
//! ## Purpose
//!
//! This module defines the unified [`QuantityError`] enum returned by every
//! fallible operation in the crate. All validation is performed eagerly at
//! construction time, so an error always points at a concrete precondition
//! violation rather than at a failure discovered mid-computation.
//!
//! ## Design notes
//!
//! * Variants carry context fields (offending value, expected/got lengths,
//!   element index) so batch callers can identify the problematic input.
//! * Offending magnitudes are stored as `f64` regardless of the working
//!   float type, converted at the validation site.
//! * `Display` is implemented over `core::fmt` to remain `no_std`-friendly;
//!   `std::error::Error` is provided under the `std` feature.
//!
//! ## Key concepts
//!
//! ### Construction errors vs. value errors
//!
//! Only construction preconditions (negative error magnitudes, empty inputs,
//! arity and broadcast-length mismatches, degenerate weights) are surfaced
//! as [`QuantityError`]. Value-level arithmetic follows IEEE float
//! semantics: division by zero, logarithms of non-positive values and
//! similar conditions propagate infinity/NaN instead of failing, so an
//! element-wise batch operation is never aborted by one bad element.
//!
//! ## Visibility
//!
//! [`QuantityError`] is part of the public API and the error type of the
//! crate-wide [`Result`](crate::Result) alias.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors surfaced by quantity construction, propagation and aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// An error magnitude was negative (or NaN).
    NegativeError {
        /// Which component was invalid (`"err_sys"` or `"err_stat"`).
        which: &'static str,
        /// The offending magnitude.
        value: f64,
    },

    /// A measured quantity was constructed from an empty sample sequence.
    EmptyMeasurements,

    /// The sigma-interval multiplier was not a positive finite number.
    InvalidSigmaInterval(f64),

    /// The number of partial derivatives does not match the operand count.
    ArityMismatch {
        /// Number of partial derivatives supplied.
        partials: usize,
        /// Number of operands supplied.
        args: usize,
    },

    /// A derived quantity was constructed with no operands.
    EmptyArgs,

    /// A weighted average was requested over an empty sequence.
    EmptyAverage,

    /// A weighted-average input has zero total error, so its inverse-variance
    /// weight is undefined.
    DegenerateWeight {
        /// Index of the offending element in the input sequence.
        index: usize,
    },

    /// A per-element error sequence does not match the data length.
    BroadcastLength {
        /// Length of the data sequence.
        expected: usize,
        /// Length of the error sequence.
        got: usize,
    },

    /// Input data could not be viewed as a contiguous slice.
    InvalidInput(String),
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeError { which, value } => {
                write!(f, "error magnitude {which}={value} must be non-negative")
            }
            Self::EmptyMeasurements => {
                write!(f, "measured quantity requires at least one sample")
            }
            Self::InvalidSigmaInterval(v) => {
                write!(f, "sigma interval {v} must be positive and finite")
            }
            Self::ArityMismatch { partials, args } => {
                write!(
                    f,
                    "got {partials} partial derivatives for {args} operands; counts must match"
                )
            }
            Self::EmptyArgs => {
                write!(f, "derived quantity requires at least one operand")
            }
            Self::EmptyAverage => {
                write!(f, "weighted average requires a non-empty input sequence")
            }
            Self::DegenerateWeight { index } => {
                write!(
                    f,
                    "input {index} has zero total error; inverse-variance weight is undefined"
                )
            }
            Self::BroadcastLength { expected, got } => {
                write!(
                    f,
                    "error sequence has length {got} but data has length {expected}"
                )
            }
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuantityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = QuantityError::NegativeError {
            which: "err_sys",
            value: -0.5,
        };
        assert!(err.to_string().contains("err_sys=-0.5"));

        let err = QuantityError::BroadcastLength {
            expected: 3,
            got: 2,
        };
        assert!(err.to_string().contains("length 2"));
        assert!(err.to_string().contains("length 3"));

        let err = QuantityError::DegenerateWeight { index: 4 };
        assert!(err.to_string().contains('4'));
    }
}
