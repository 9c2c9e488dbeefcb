//! Quantities derived from repeated raw measurements.
//!
//! ## Purpose
//!
//! This module defines [`MeasuredQuantity`], the specialization of
//! [`Quantity`] whose value and statistical error are computed from an
//! ordered sequence of raw samples: the value is the arithmetic mean and the
//! statistical error is the sigma-scaled standard error of the mean. The
//! systematic error is supplied by the caller (instrument precision is not
//! derivable from the samples).
//!
//! ## Design notes
//!
//! * The raw sample sequence is retained read-only for later inspection;
//!   the derived quantity surface is exposed through `Deref` and `From`.
//! * `err_stat = sigma_interval · σ / sqrt(n)` with the population standard
//!   deviation σ (see [`crate::math::stats`] for the divisor convention).
//! * The sigma interval selects the confidence width the statistical error
//!   represents (1 ≈ 68.3%, 2 ≈ 95.4%, 3 ≈ 99.7%); the default is 2.
//! * Exactly one sample is accepted as a degenerate limiting case with a
//!   statistical error of zero; an empty sequence is rejected.
//!
//! ## Invariants
//!
//! * `measurements` is non-empty and never mutated after construction.
//! * `sigma_interval > 0` and finite.
//! * The embedded quantity satisfies the usual non-negative error invariant.
//!
//! ## Visibility
//!
//! [`MeasuredQuantity`] is part of the public API.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::ops::Deref;

use crate::engine::quantity::Quantity;
use crate::input::SampleInput;
use crate::math::stats;
use crate::primitives::errors::QuantityError;
use crate::primitives::validator::Validator;
use num_traits::Float;

// ============================================================================
// Measured Quantity
// ============================================================================

/// A quantity whose value and statistical error come from repeated samples.
#[derive(Debug, Clone)]
pub struct MeasuredQuantity<T> {
    quantity: Quantity<T>,
    measurements: Vec<T>,
    sigma_interval: T,
}

impl<T: Float> MeasuredQuantity<T> {
    /// Default sigma interval: 2 (a ≈ 95.4% confidence width).
    pub const DEFAULT_SIGMA_INTERVAL: f64 = 2.0;

    /// Create a measured quantity from raw samples, using the default
    /// 2-sigma interval for the statistical error.
    ///
    /// # Errors
    ///
    /// * [`QuantityError::EmptyMeasurements`] for an empty sample sequence.
    /// * [`QuantityError::NegativeError`] for a negative (or NaN) `err_sys`.
    pub fn new<I>(measurements: &I, err_sys: T) -> Result<Self, QuantityError>
    where
        I: SampleInput<T> + ?Sized,
    {
        Self::with_sigma_interval(
            measurements,
            err_sys,
            T::from(Self::DEFAULT_SIGMA_INTERVAL).unwrap(),
        )
    }

    /// Create a measured quantity with an explicit sigma interval.
    ///
    /// # Errors
    ///
    /// As [`MeasuredQuantity::new`], plus
    /// [`QuantityError::InvalidSigmaInterval`] unless `sigma_interval` is
    /// positive and finite.
    pub fn with_sigma_interval<I>(
        measurements: &I,
        err_sys: T,
        sigma_interval: T,
    ) -> Result<Self, QuantityError>
    where
        I: SampleInput<T> + ?Sized,
    {
        let samples = measurements.as_sample_slice()?;

        Validator::validate_measurements(samples)?;
        Validator::validate_error_magnitude("err_sys", err_sys)?;
        Validator::validate_sigma_interval(sigma_interval)?;

        let value = stats::mean(samples);
        // Zero for a single sample: the standard error degenerates.
        let err_stat = sigma_interval * stats::standard_error(samples);

        Ok(Self {
            quantity: Quantity::new(value, err_sys, err_stat)?,
            measurements: samples.to_vec(),
            sigma_interval,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw sample sequence, in insertion order.
    #[inline]
    pub fn measurements(&self) -> &[T] {
        &self.measurements
    }

    /// Number of raw samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.measurements.len()
    }

    /// The sigma-interval multiplier applied to the standard error.
    #[inline]
    pub fn sigma_interval(&self) -> T {
        self.sigma_interval
    }

    /// The derived quantity (mean, supplied systematic error, sigma-scaled
    /// statistical error).
    #[inline]
    pub fn quantity(&self) -> Quantity<T> {
        self.quantity
    }
}

// ============================================================================
// Quantity Surface
// ============================================================================

impl<T> Deref for MeasuredQuantity<T> {
    type Target = Quantity<T>;

    fn deref(&self) -> &Self::Target {
        &self.quantity
    }
}

impl<T: Float> From<MeasuredQuantity<T>> for Quantity<T> {
    fn from(measured: MeasuredQuantity<T>) -> Self {
        measured.quantity
    }
}

impl<T: Float> From<&MeasuredQuantity<T>> for Quantity<T> {
    fn from(measured: &MeasuredQuantity<T>) -> Self {
        measured.quantity
    }
}

impl<T: Float + fmt::Display> fmt::Display for MeasuredQuantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.quantity.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PERIODS: [f64; 8] = [2.77, 2.81, 2.93, 2.95, 2.49, 2.81, 2.95, 2.76];

    #[test]
    fn pendulum_reference_values() {
        let t = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();
        assert_relative_eq!(t.value(), 2.8088, max_relative = 1e-4);
        assert_relative_eq!(t.err_stat(), 0.1000, max_relative = 1e-3);
        assert_eq!(t.err_sys(), 0.3);
        assert_eq!(t.sample_count(), 8);
        assert_eq!(t.measurements(), &PERIODS);
    }

    #[test]
    fn sigma_interval_scales_linearly() {
        let two = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();
        let three = MeasuredQuantity::with_sigma_interval(&PERIODS, 0.3, 3.0).unwrap();
        assert_relative_eq!(three.err_stat(), 0.15, max_relative = 1e-3);
        assert_relative_eq!(three.err_stat(), 1.5 * two.err_stat(), max_relative = 1e-12);
        assert_eq!(three.value(), two.value());
    }

    #[test]
    fn rejects_empty_samples() {
        let empty: [f64; 0] = [];
        assert_eq!(
            MeasuredQuantity::new(&empty, 0.1).unwrap_err(),
            QuantityError::EmptyMeasurements
        );
    }

    #[test]
    fn single_sample_has_zero_statistical_error() {
        let m = MeasuredQuantity::new(&[4.2], 0.05).unwrap();
        assert_eq!(m.value(), 4.2);
        assert_eq!(m.err_stat(), 0.0);
        assert!(!m.has_statistical_error());
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            MeasuredQuantity::new(&PERIODS, -0.1).unwrap_err(),
            QuantityError::NegativeError { which: "err_sys", .. }
        ));
        assert!(matches!(
            MeasuredQuantity::with_sigma_interval(&PERIODS, 0.3, 0.0).unwrap_err(),
            QuantityError::InvalidSigmaInterval(_)
        ));
    }

    #[test]
    fn converts_into_plain_quantity() {
        let m = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();
        let q: Quantity<f64> = (&m).into();
        assert_eq!(q.value(), m.value());
        assert_eq!(q.err_stat(), m.err_stat());
    }
}
