//! Layer 4: Aggregate
//!
//! Reductions over sequences of quantities.
//!
//! # Module Organization
//!
//! - **weighted**: Inverse-variance weighted averaging

/// Weighted averaging.
///
/// Provides:
/// - `weighted_average` over independent quantities
/// - Degenerate-weight rejection
pub mod weighted;
