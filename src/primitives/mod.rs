//! Layer 1: Primitives
//!
//! Core building blocks shared by every other layer.
//!
//! This layer provides the crate-wide error type and the construction-time
//! validation utilities. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (QuantityError)
//! - **validator**: Eager fail-fast precondition checks
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Sequence (broadcast construction, extraction, element-wise maps)
//!   ↓
//! Layer 4: Aggregate (weighted averaging)
//!   ↓
//! Layer 3: Ops (arithmetic overlay, transcendental functions)
//!   ↓
//! Layer 2: Engine (Quantity, MeasuredQuantity, derived-quantity engine)
//!   ↓
//! Layer 1.5: Math (descriptive statistics)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `QuantityError` enum
/// - Context-bearing error variants
pub mod errors;

/// Construction-time validation.
///
/// Provides:
/// - Error-magnitude and sigma-interval checks
/// - Arity and broadcast-length checks
pub mod validator;
