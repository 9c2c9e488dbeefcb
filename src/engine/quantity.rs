//! The error-carrying quantity value object.
//!
//! ## Purpose
//!
//! This module defines [`Quantity`], the central value type of the crate: a
//! real value paired with a systematic and a statistical error magnitude.
//! Every arithmetic operation in the crate consumes and produces values of
//! this type.
//!
//! ## Design notes
//!
//! * **Immutable**: a quantity is never mutated after construction; every
//!   operation produces a new value.
//! * **Copy**: three floats, passed by value throughout.
//! * **Validated**: construction rejects negative (or NaN) error magnitudes
//!   eagerly with [`QuantityError::NegativeError`].
//! * **Generic**: all methods are generic over `Float` to support f32/f64.
//! * Comparisons (`PartialEq`/`PartialOrd`) operate on the value only:
//!   plain numeric pass-through, error bars are not consulted.
//!
//! ## Key concepts
//!
//! ### Total error
//!
//! The combined error used by inverse-variance weighting is the linear sum
//! `err_sys + err_stat`. Systematic errors represent worst-case instrument
//! bias and never combine in quadrature with sampling variability here.
//!
//! ### Canonical rendering
//!
//! A quantity renders as `value ± err_sys ± err_stat`, omitting each error
//! term that is exactly zero. An exact quantity therefore renders as a bare
//! number, and a quantity without sampling data renders with a single `±`
//! term. [`Quantity::has_statistical_error`] exposes the zero-omission flag
//! to display collaborators.
//!
//! ## Invariants
//!
//! * `err_sys >= 0` and `err_stat >= 0` for every constructed quantity.
//!
//! ## Visibility
//!
//! [`Quantity`] is the primary public type of the crate.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::cmp::Ordering;
use core::fmt;

use crate::primitives::errors::QuantityError;
use crate::primitives::validator::Validator;
use num_traits::Float;

// ============================================================================
// Quantity
// ============================================================================

/// A value with a systematic and a statistical error magnitude.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<T> {
    value: T,
    err_sys: T,
    err_stat: T,
}

impl<T: Float> Quantity<T> {
    /// Create a quantity from a value and its two error magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NegativeError`] if either magnitude is
    /// negative or NaN.
    pub fn new(value: T, err_sys: T, err_stat: T) -> Result<Self, QuantityError> {
        Validator::validate_errors(err_sys, err_stat)?;
        Ok(Self {
            value,
            err_sys,
            err_stat,
        })
    }

    /// Create an exact quantity (both errors zero).
    ///
    /// Plain numbers entering mixed arithmetic are coerced through this
    /// constructor.
    #[inline]
    pub fn exact(value: T) -> Self {
        Self {
            value,
            err_sys: T::zero(),
            err_stat: T::zero(),
        }
    }

    /// Create a quantity with a systematic error only.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NegativeError`] if the magnitude is negative
    /// or NaN.
    pub fn with_sys_error(value: T, err_sys: T) -> Result<Self, QuantityError> {
        Self::new(value, err_sys, T::zero())
    }

    /// Internal unchecked constructor for values produced by propagation,
    /// where non-negativity holds by construction (absolute values and
    /// square roots).
    #[inline]
    pub(crate) fn from_propagation(value: T, err_sys: T, err_stat: T) -> Self {
        debug_assert!(!(err_sys < T::zero()), "propagated err_sys is negative");
        debug_assert!(!(err_stat < T::zero()), "propagated err_stat is negative");
        Self {
            value,
            err_sys,
            err_stat,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The central value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The systematic (precision) error magnitude.
    #[inline]
    pub fn err_sys(&self) -> T {
        self.err_sys
    }

    /// The statistical (accuracy) error magnitude.
    #[inline]
    pub fn err_stat(&self) -> T {
        self.err_stat
    }

    /// The combined error used for inverse-variance weighting:
    /// `err_sys + err_stat`.
    #[inline]
    pub fn total_error(&self) -> T {
        self.err_sys + self.err_stat
    }

    /// Whether the statistical error is nonzero.
    ///
    /// Display collaborators use this flag to decide between the
    /// `value ± err_sys ± err_stat` and `value ± err_sys` renderings.
    #[inline]
    pub fn has_statistical_error(&self) -> bool {
        self.err_stat != T::zero()
    }

    /// Whether the systematic error is nonzero.
    #[inline]
    pub fn has_systematic_error(&self) -> bool {
        self.err_sys != T::zero()
    }

    // ========================================================================
    // Relative Errors
    // ========================================================================

    /// Systematic error as a percentage of the value.
    #[inline]
    pub fn err_sys_relative(&self) -> T {
        T::from(100).unwrap() * self.err_sys / self.value
    }

    /// Statistical error as a percentage of the value.
    #[inline]
    pub fn err_stat_relative(&self) -> T {
        T::from(100).unwrap() * self.err_stat / self.value
    }

    // ========================================================================
    // Exact Transformations
    // ========================================================================

    /// Rescale the quantity by an exact factor.
    ///
    /// Value and both error magnitudes are multiplied by `|factor|`-adjusted
    /// amounts: this is the unit-conversion transformation, not error
    /// propagation through an uncertain operand.
    pub fn scale(&self, factor: T) -> Self {
        Self::from_propagation(
            self.value * factor,
            self.err_sys * factor.abs(),
            self.err_stat * factor.abs(),
        )
    }
}

// ============================================================================
// Comparisons (value-only pass-through)
// ============================================================================

impl<T: Float> PartialEq for Quantity<T> {
    /// Equality on the central value only; error bars are not consulted.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Float> PartialOrd for Quantity<T> {
    /// Ordering on the central value only.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Quantity<T> {
    /// Canonical `value ± err_sys ± err_stat` rendering, omitting each error
    /// term that is exactly zero. Honors the formatter's precision, e.g.
    /// `format!("{:.3}", q)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => {
                write!(f, "{:.*}", p, self.value)?;
                if self.has_systematic_error() {
                    write!(f, " ± {:.*}", p, self.err_sys)?;
                }
                if self.has_statistical_error() {
                    write!(f, " ± {:.*}", p, self.err_stat)?;
                }
            }
            None => {
                write!(f, "{}", self.value)?;
                if self.has_systematic_error() {
                    write!(f, " ± {}", self.err_sys)?;
                }
                if self.has_statistical_error() {
                    write!(f, " ± {}", self.err_stat)?;
                }
            }
        }
        Ok(())
    }
}

impl<T: Float + fmt::Display> Quantity<T> {
    /// Render with each nonzero error expressed as a percentage of the
    /// value, e.g. `9.208 ± 21.74% ± 7.12%`.
    pub fn format_relative(&self, decimals: usize) -> String {
        use core::fmt::Write;

        let mut out = String::new();
        // Rendering into a String cannot fail.
        let _ = write!(out, "{:.*}", decimals, self.value);
        if self.has_systematic_error() {
            let _ = write!(out, " ± {:.*}%", decimals, self.err_sys_relative());
        }
        if self.has_statistical_error() {
            let _ = write!(out, " ± {:.*}%", decimals, self.err_stat_relative());
        }
        out
    }
}
