//! Descriptive statistics for raw measurement samples.
//!
//! ## Purpose
//!
//! This module provides the small set of sample statistics needed to turn a
//! raw measurement sequence into a value with a statistical error: the
//! arithmetic mean, the population standard deviation and the standard error
//! of the mean.
//!
//! ## Design notes
//!
//! * All functions are generic over `Float` types to support f32 and f64.
//! * The standard deviation uses the population divisor `n`. This is the
//!   convention of the laboratory sigma-interval formula implemented by
//!   [`MeasuredQuantity`](crate::engine::measured::MeasuredQuantity): on the
//!   reference pendulum dataset it yields the documented 2-sigma standard
//!   error of 0.1000.
//! * Single-pass accumulation; no allocation.
//!
//! ## Invariants
//!
//! * `std_dev >= 0` for any input.
//! * `std_dev = 0` for fewer than two samples (degenerate limiting case).
//! * `mean` of an empty slice is 0 by convention; callers validate
//!   non-emptiness before reaching this layer.
//!
//! ## Non-goals
//!
//! * This module does not provide robust (outlier-resistant) statistics.
//! * This module does not handle non-finite samples specially (NaN/Inf
//!   propagate per IEEE semantics).
//!
//! ## Visibility
//!
//! Internal utility layer; not part of the stable public API.

use num_traits::Float;

// ============================================================================
// Sample Statistics
// ============================================================================

/// Arithmetic mean of a sample slice.
pub fn mean<T: Float>(samples: &[T]) -> T {
    let n = samples.len();
    if n == 0 {
        return T::zero();
    }

    let sum = samples.iter().fold(T::zero(), |acc, &s| acc + s);
    sum / T::from(n).unwrap()
}

/// Population standard deviation (divisor `n`) of a sample slice.
pub fn std_dev<T: Float>(samples: &[T]) -> T {
    let n = samples.len();
    if n <= 1 {
        return T::zero();
    }

    let m = mean(samples);
    let sum_sq = samples.iter().fold(T::zero(), |acc, &s| {
        let d = s - m;
        acc + d * d
    });

    (sum_sq / T::from(n).unwrap()).sqrt()
}

/// Standard error of the mean: `std_dev / sqrt(n)`.
pub fn standard_error<T: Float>(samples: &[T]) -> T {
    let n = samples.len();
    if n <= 1 {
        return T::zero();
    }

    std_dev(samples) / T::from(n).unwrap().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Pendulum period samples from the reference dataset (seconds).
    const PERIODS: [f64; 8] = [2.77, 2.81, 2.93, 2.95, 2.49, 2.81, 2.95, 2.76];

    #[test]
    fn mean_of_reference_samples() {
        assert_relative_eq!(mean(&PERIODS), 2.80875, max_relative = 1e-12);
    }

    #[test]
    fn population_std_dev_of_reference_samples() {
        // sqrt(sum((x - mean)^2) / 8)
        assert_relative_eq!(std_dev(&PERIODS), 0.14146, max_relative = 1e-4);
    }

    #[test]
    fn standard_error_of_reference_samples() {
        // 2 * SE = 0.1000 is the documented 2-sigma statistical error.
        assert_relative_eq!(2.0 * standard_error(&PERIODS), 0.1000, max_relative = 1e-3);
    }

    #[test]
    fn degenerate_sample_counts() {
        assert_eq!(mean::<f64>(&[]), 0.0);
        assert_eq!(std_dev(&[3.2]), 0.0);
        assert_eq!(standard_error(&[3.2]), 0.0);
        assert_eq!(mean(&[3.2]), 3.2);
    }
}
