//! Conversion between tenleg tensors and `ndarray` arrays.
//!
//! A `Tensor` and an `ArrayD` in standard layout agree on element order (row-major), so converting one way reuses the buffer. The legs have no place in an `ArrayD` and travel alongside it as a `LegMapper`.

use ndarray::{ArrayD, IxDyn, ShapeError};
use tenleg_core::{
    error::TensorError, leg::Leg, mapper::LegMapper, repr::DenseRepr, tensor::Tensor,
};
use thiserror::Error;
use tracing::trace;

/// Errors raised while crossing between tenleg and ndarray.
#[derive(Error, Debug)]
pub enum NdConvertError {
    /// The tensor side rejected the array, e.g. wrong number of legs.
    #[error("tensor conversion failed: {0}")]
    Tensor(#[from] TensorError),
    /// ndarray rejected the shape.
    #[error("ndarray shape rejected: {0}")]
    Shape(#[from] ShapeError),
}

/// Splits a tensor into a standard-layout array and its legs.
pub fn into_ndarray<E>(tensor: Tensor<E>) -> Result<(ArrayD<E>, LegMapper), NdConvertError> {
    let (repr, mapper) = tensor.into_raw();
    let (dims, data) = repr.into_raw();
    trace!(?dims, "tensor into ndarray");
    let array = ArrayD::from_shape_vec(IxDyn(&dims), data)?;
    Ok((array, mapper))
}

/// Builds a tensor from an array, reading its elements in logical (row-major) order whatever the memory layout.
pub fn from_ndarray<E: Clone>(array: &ArrayD<E>, legs: Vec<Leg>) -> Result<Tensor<E>, NdConvertError> {
    let dims = array.shape().to_vec();
    trace!(?dims, "tensor from ndarray");
    let data = array.iter().cloned().collect();
    Ok(Tensor::from_data(dims, legs, data)?)
}

/// ndarray views of a tensor.
pub trait NdTensorExt<E> {
    /// Copies the tensor into a standard-layout array.
    fn to_ndarray(&self) -> Result<ArrayD<E>, NdConvertError>;
}

impl<E: Clone> NdTensorExt<E> for Tensor<E> {
    fn to_ndarray(&self) -> Result<ArrayD<E>, NdConvertError> {
        Ok(ArrayD::from_shape_vec(IxDyn(self.dims()), self.data().to_vec())?)
    }
}

/// Rebuilds a tensor from an array produced by `into_ndarray`, keeping its legs.
pub fn with_legs<E: Clone>(array: &ArrayD<E>, mapper: LegMapper) -> Result<Tensor<E>, NdConvertError> {
    let data = array.iter().cloned().collect();
    let repr = DenseRepr::from_raw(array.shape().to_vec(), data)?;
    Tensor::from_raw(repr, mapper).map_err(|(repr, mapper)| {
        NdConvertError::Tensor(TensorError::RankMismatch {
            expected: repr.naxes(),
            found: mapper.naxes(),
        })
    })
}
