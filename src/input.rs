//! Input abstraction for raw numeric sequences.
//!
//! This module defines the `SampleInput` trait which allows sample-consuming
//! constructors and sequence helpers to accept standard slices, vectors and
//! (with the `ndarray` feature) 1-D ndarray inputs interchangeably.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(all(feature = "ndarray", not(feature = "std")))]
use alloc::string::ToString;

use crate::primitives::errors::QuantityError;
use num_traits::Float;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};

/// Trait for types that can be viewed as a contiguous sample slice.
pub trait SampleInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_sample_slice(&self) -> Result<&[T], QuantityError>;
}

impl<T: Float> SampleInput<T> for [T] {
    fn as_sample_slice(&self) -> Result<&[T], QuantityError> {
        Ok(self)
    }
}

impl<T: Float> SampleInput<T> for Vec<T> {
    fn as_sample_slice(&self) -> Result<&[T], QuantityError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> SampleInput<T> for [T; N] {
    fn as_sample_slice(&self) -> Result<&[T], QuantityError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> SampleInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sample_slice(&self) -> Result<&[T], QuantityError> {
        self.as_slice().ok_or_else(|| {
            QuantityError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
