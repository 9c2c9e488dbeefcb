//! Linear propagation of measurement uncertainty through arithmetic
//! expressions.
//!
//! ## Purpose
//!
//! This crate represents laboratory measurements as quantities carrying a
//! systematic and a statistical error magnitude, and propagates both
//! through arithmetic using first-order (linear) error propagation:
//! systematic errors combine linearly (worst case), statistical errors in
//! quadrature (independent). Repeated raw measurements are reduced to a
//! mean with a sigma-scaled standard error, and independent results can be
//! combined by inverse-variance weighted averaging.
//!
//! ## Example
//!
//! Gravitational acceleration from a pendulum, g = 4π²·l/T²:
//!
//! ```
//! use errorprop::{MeasuredQuantity, Quantity};
//! use std::f64::consts::PI;
//!
//! let length = Quantity::new(1.84, 0.007, 0.0)?;
//! let period = MeasuredQuantity::new(
//!     &[2.77, 2.81, 2.93, 2.95, 2.49, 2.81, 2.95, 2.76],
//!     0.3,
//! )?;
//!
//! let g = 4.0 * PI * PI * length / period.quantity().powi(2);
//! assert!((g.value() - 9.208).abs() < 1e-2);
//! println!("{:.3}", g); // 9.208 ± 2.002 ± 0.656
//! # Ok::<(), errorprop::QuantityError>(())
//! ```
//!
//! ## Design notes
//!
//! * All numeric code is generic over [`num_traits::Float`] (f32/f64).
//! * Construction is validated eagerly; arithmetic over constructed
//!   quantities never fails, following IEEE float semantics for
//!   out-of-domain values.
//! * Everything is an immutable value object: each operation evaluates
//!   eagerly and returns a new quantity, no expression graph is retained.
//! * `no_std` + `alloc` is supported (enable this crate's `libm` feature
//!   for float math without the standard library).
//!
//! ## Features
//!
//! * `std` (default): standard library support, `std::error::Error`.
//! * `libm`: float math for `no_std` targets.
//! * `parallel`: rayon-based data-parallel sequence mapping.
//! * `ndarray`: accept 1-D ndarray inputs in sample-consuming functions.
//!
//! ## Non-goals
//!
//! * No symbolic differentiation: derivatives come from the fixed operation
//!   table or are supplied by the caller.
//! * No correlated-error propagation: operand errors are independent.
//! * No ingestion or plotting: collaborators supply plain numeric
//!   sequences and consume `(value, err_sys, err_stat)` triples.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: shared error types and validation.
pub mod primitives;

/// Layer 1.5: descriptive statistics.
pub mod math;

/// Layer 2: the quantity abstraction and the propagation engine.
pub mod engine;

/// Layer 3: the arithmetic overlay.
pub mod ops;

/// Layer 4: reductions over quantity sequences.
pub mod aggregate;

/// Layer 5: construction and deconstruction of quantity vectors.
pub mod sequence;

/// Input abstraction for raw numeric sequences.
pub mod input;

/// Public API surface.
pub mod api;

pub use api::{
    weighted_average, ErrorSpec, MeasuredQuantity, Operand, Quantity, QuantityError, Result,
    SampleInput,
};
