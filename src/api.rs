//! High-level API for error-propagating arithmetic.
//!
//! ## Purpose
//!
//! This module collects the public surface of the crate: the quantity
//! constructors, the aggregation entry point, the sequence helpers and the
//! crate-wide `Result` alias.
//!
//! ## Key concepts
//!
//! ### Typical flow
//!
//! 1. Construct quantities: [`Quantity::new`] for a value with known errors,
//!    [`MeasuredQuantity::new`] for repeated raw samples,
//!    [`sequence::from_values`](crate::sequence::from_values) for parallel
//!    arrays.
//! 2. Combine them with ordinary arithmetic (`+ - * /`, `powf`, `sqrt`, …)
//!    or an explicit [`Quantity::derived`] call; every operation returns a
//!    new quantity with propagated errors.
//! 3. Optionally reduce repeated results with [`weighted_average`].
//! 4. Render via `Display` (`value ± err_sys ± err_stat`, zero terms
//!    omitted).
//!
//! ## Visibility
//!
//! Types re-exported here are considered stable.

use core::result;

pub use crate::aggregate::weighted::weighted_average;
pub use crate::engine::measured::MeasuredQuantity;
pub use crate::engine::quantity::Quantity;
pub use crate::input::SampleInput;
pub use crate::ops::arith::Operand;
pub use crate::primitives::errors::QuantityError;
pub use crate::sequence::ErrorSpec;

/// Result type alias for quantity operations.
pub type Result<T> = result::Result<T, QuantityError>;
