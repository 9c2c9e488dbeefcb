//! Layer 2: Engine
//!
//! The quantity abstraction and the propagation engine.
//!
//! # Module Organization
//!
//! - **quantity**: The `Quantity` value object (value + two error magnitudes)
//! - **measured**: `MeasuredQuantity` built from raw sample sequences
//! - **derived**: Linear error propagation through supplied derivatives

/// The quantity value object.
///
/// Provides:
/// - Validated construction
/// - Total-error combination and zero-omission rendering
/// - Value-only comparisons
pub mod quantity;

/// Quantities from repeated measurements.
///
/// Provides:
/// - Mean and sigma-scaled standard error from raw samples
/// - Read-only sample retention
pub mod measured;

/// Derived quantities.
///
/// Provides:
/// - N-ary construction from a value function and partial derivatives
/// - Fixed-arity propagation helpers for the arithmetic overlay
pub mod derived;
