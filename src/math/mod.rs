//! Layer 1.5: Math
//!
//! Numerical helpers shared by the engine layer.
//!
//! # Module Organization
//!
//! - **stats**: Descriptive sample statistics (mean, standard deviation,
//!   standard error of the mean)

/// Descriptive statistics.
///
/// Provides:
/// - Arithmetic mean
/// - Population standard deviation
/// - Standard error of the mean
pub mod stats;
