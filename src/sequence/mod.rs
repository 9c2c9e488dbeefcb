//! Layer 5: Sequence
//!
//! Construction and deconstruction of quantity vectors.
//!
//! ## Purpose
//!
//! This module builds ordered sequences of independent quantities from
//! parallel value/error arrays and extracts parallel arrays back out of any
//! quantity sequence. It also provides element-wise mapping, sequentially
//! or data-parallel under the `parallel` feature.
//!
//! ## Design notes
//!
//! * **Broadcast rule**: an error specification is either a scalar
//!   (broadcast to all positions) or a per-element slice whose length must
//!   match the data exactly; a mismatch fails eagerly with
//!   [`QuantityError::BroadcastLength`]. The rule is expressed as the
//!   explicit [`ErrorSpec`] sum type, not by convention.
//! * Elements are independent: no invariant couples one element to another,
//!   and element-wise maps compute each output in isolation (embarrassingly
//!   parallel).
//! * Extraction preserves order and length; extracting from a sequence
//!   built by [`from_values`] reproduces the inputs exactly.
//!
//! ## Non-goals
//!
//! * No file or spreadsheet ingestion: callers supply plain numeric
//!   sequences.
//! * No cross-element statistics (see the aggregate layer for reductions).
//!
//! ## Visibility
//!
//! All items are part of the public API.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::engine::quantity::Quantity;
use crate::input::SampleInput;
use crate::primitives::errors::QuantityError;
use crate::primitives::validator::Validator;
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// Broadcast Specification
// ============================================================================

/// An error specification for sequence construction: one magnitude for all
/// elements, or one magnitude per element.
#[derive(Debug, Clone, Copy)]
pub enum ErrorSpec<'a, T> {
    /// A single magnitude broadcast to every element.
    Scalar(T),

    /// One magnitude per element; length must match the data.
    PerElement(&'a [T]),
}

impl<'a, T: Float> ErrorSpec<'a, T> {
    /// Validate the specification against the data length.
    fn validate(&self, data_len: usize) -> Result<(), QuantityError> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::PerElement(errs) => Validator::validate_broadcast(data_len, errs.len()),
        }
    }

    /// Magnitude for position `index`; call only after [`Self::validate`].
    #[inline]
    fn get(&self, index: usize) -> T {
        match self {
            Self::Scalar(err) => *err,
            Self::PerElement(errs) => errs[index],
        }
    }
}

impl<'a, T: Float> From<T> for ErrorSpec<'a, T> {
    #[inline]
    fn from(err: T) -> Self {
        Self::Scalar(err)
    }
}

impl<'a, T: Float> From<&'a [T]> for ErrorSpec<'a, T> {
    #[inline]
    fn from(errs: &'a [T]) -> Self {
        Self::PerElement(errs)
    }
}

impl<'a, T: Float> From<&'a Vec<T>> for ErrorSpec<'a, T> {
    #[inline]
    fn from(errs: &'a Vec<T>) -> Self {
        Self::PerElement(errs.as_slice())
    }
}

impl<'a, T: Float, const N: usize> From<&'a [T; N]> for ErrorSpec<'a, T> {
    #[inline]
    fn from(errs: &'a [T; N]) -> Self {
        Self::PerElement(errs.as_slice())
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Build a sequence of independent quantities from parallel arrays.
///
/// `err_sys` and `err_stat` each accept a scalar (broadcast) or a
/// per-element slice.
///
/// # Errors
///
/// * [`QuantityError::BroadcastLength`] if a per-element error slice does
///   not match the data length.
/// * [`QuantityError::NegativeError`] if any magnitude is negative or NaN.
///
/// # Examples
///
/// ```
/// use errorprop::sequence::from_values;
///
/// let forces = from_values(&[292.4, 260.0, 231.0], 1.0, 0.0)?;
/// assert_eq!(forces.len(), 3);
/// assert_eq!(forces[1].value(), 260.0);
/// assert_eq!(forces[1].err_sys(), 1.0);
/// # Ok::<(), errorprop::QuantityError>(())
/// ```
pub fn from_values<'s, 't, T, I>(
    data: &I,
    err_sys: impl Into<ErrorSpec<'s, T>>,
    err_stat: impl Into<ErrorSpec<'t, T>>,
) -> Result<Vec<Quantity<T>>, QuantityError>
where
    T: Float + 's + 't,
    I: SampleInput<T> + ?Sized,
{
    let values = data.as_sample_slice()?;
    let err_sys = err_sys.into();
    let err_stat = err_stat.into();

    err_sys.validate(values.len())?;
    err_stat.validate(values.len())?;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Quantity::new(value, err_sys.get(i), err_stat.get(i)))
        .collect()
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract the central values of a quantity sequence, preserving order.
pub fn values<T: Float>(quantities: &[Quantity<T>]) -> Vec<T> {
    quantities.iter().map(Quantity::value).collect()
}

/// Extract the systematic error magnitudes, preserving order.
pub fn sys_errors<T: Float>(quantities: &[Quantity<T>]) -> Vec<T> {
    quantities.iter().map(Quantity::err_sys).collect()
}

/// Extract the statistical error magnitudes, preserving order.
pub fn stat_errors<T: Float>(quantities: &[Quantity<T>]) -> Vec<T> {
    quantities.iter().map(Quantity::err_stat).collect()
}

/// Extract the combined (systematic + statistical) errors, preserving order.
pub fn total_errors<T: Float>(quantities: &[Quantity<T>]) -> Vec<T> {
    quantities.iter().map(Quantity::total_error).collect()
}

// ============================================================================
// Element-wise Mapping
// ============================================================================

/// Apply a quantity operation to every element, producing a same-shaped
/// sequence. Each output is computed independently.
///
/// # Examples
///
/// ```
/// use errorprop::sequence::{from_values, map};
///
/// let lengths = from_values(&[4.0, 9.0], 0.1, 0.0)?;
/// let roots = map(&lengths, |q| q.sqrt());
/// assert_eq!(roots[1].value(), 3.0);
/// # Ok::<(), errorprop::QuantityError>(())
/// ```
pub fn map<T, F>(quantities: &[Quantity<T>], op: F) -> Vec<Quantity<T>>
where
    T: Float,
    F: Fn(Quantity<T>) -> Quantity<T>,
{
    quantities.iter().map(|&q| op(q)).collect()
}

/// Data-parallel variant of [`map`], distributing elements across CPU
/// cores. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn par_map<T, F>(quantities: &[Quantity<T>], op: F) -> Vec<Quantity<T>>
where
    T: Float + Send + Sync,
    F: Fn(Quantity<T>) -> Quantity<T> + Sync,
{
    quantities.par_iter().map(|&q| op(q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scalar_broadcast_construction() {
        let qs = from_values(&[292.4, 260.0, 231.0], 1.0, 0.0).unwrap();
        assert_eq!(qs.len(), 3);
        for (q, &v) in qs.iter().zip(&[292.4, 260.0, 231.0]) {
            assert_eq!(q.value(), v);
            assert_eq!(q.err_sys(), 1.0);
            assert_eq!(q.err_stat(), 0.0);
        }
    }

    #[test]
    fn per_element_errors() {
        let qs = from_values(&[1.0, 2.0], &[0.1, 0.2], 0.05).unwrap();
        assert_eq!(qs[0].err_sys(), 0.1);
        assert_eq!(qs[1].err_sys(), 0.2);
        assert_eq!(qs[0].err_stat(), 0.05);
        assert_eq!(qs[1].err_stat(), 0.05);
    }

    #[test]
    fn rejects_mismatched_error_lengths() {
        let err = from_values(&[1.0, 2.0, 3.0], &[0.1, 0.2], 0.0).unwrap_err();
        assert_eq!(
            err,
            QuantityError::BroadcastLength {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_negative_per_element_error() {
        let err = from_values(&[1.0, 2.0], &[0.1, -0.2], 0.0).unwrap_err();
        assert!(matches!(err, QuantityError::NegativeError { .. }));
    }

    #[test]
    fn extraction_round_trip_is_exact() {
        let data = [292.4, 260.0, 231.0];
        let sys = [1.0, 2.0, 3.0];
        let stat = [0.5, 0.25, 0.125];
        let qs = from_values(&data, &sys, &stat).unwrap();

        assert_eq!(values(&qs), data.to_vec());
        assert_eq!(sys_errors(&qs), sys.to_vec());
        assert_eq!(stat_errors(&qs), stat.to_vec());
        assert_eq!(total_errors(&qs), vec![1.5, 2.25, 3.125]);
    }

    #[test]
    fn map_applies_elementwise() {
        let qs = from_values(&[1.0, 4.0, 9.0], 0.0, 0.9).unwrap();
        let roots = map(&qs, |q| q.sqrt());
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[2].value(), 3.0);
        // Neighboring elements do not influence each other.
        assert_relative_eq!(roots[0].err_stat(), 0.45); // 0.9/(2·1)
        assert_relative_eq!(roots[2].err_stat(), 0.15); // 0.9/(2·3)
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn par_map_matches_sequential_map() {
        let qs = from_values(&[1.0, 2.0, 3.0, 4.0], 0.1, 0.2).unwrap();
        let seq = map(&qs, |q| q * q);
        let par = par_map(&qs, |q| q * q);
        assert_eq!(values(&seq), values(&par));
        assert_eq!(sys_errors(&seq), sys_errors(&par));
    }
}
