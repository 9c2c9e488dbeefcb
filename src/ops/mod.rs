//! Layer 3: Ops
//!
//! The arithmetic overlay: a fixed, closed table of elementary operations,
//! each pairing a value function with its analytic partial derivatives.
//! Applying an operation to one or more quantities synthesizes a derived
//! quantity through the propagation engine.
//!
//! # Module Organization
//!
//! - **arith**: `std::ops` operator impls (`+ - * /`, negation) and the
//!   `Operand` coercion type for mixed quantity/number expressions
//! - **functions**: power, root, exponential, logarithmic and trigonometric
//!   wrappers

/// Operator overloads.
///
/// Provides:
/// - `Add`/`Sub`/`Mul`/`Div`/`Neg` over quantities and mixed operands
/// - Scalar left-hand-side impls for `f32`/`f64`
/// - The `Operand` sum type (constant vs. quantity)
pub mod arith;

/// Elementary function wrappers.
///
/// Provides:
/// - `powf`/`powi`/`recip`
/// - `sqrt`/`cbrt`/`exp`/`ln`/`log10`
/// - `sin`/`cos`/`tan`
pub mod functions;
