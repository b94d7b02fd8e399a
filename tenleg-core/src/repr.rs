//! Layer 1 tensor concept: dense data with axes 0-indexed by usize, only valid in the tensor.

use alloc::vec;
use alloc::vec::Vec;
use num_traits::Zero;

use crate::error::TensorError;

/// Dense, row-major tensor representation.
///
/// In the conceptual model, a representation is a rectangular array with `naxes()` axes, the `i`-th indexed from `0` up to `dims()[i] - 1`. Axes here are positional only; naming them is the job of `LegMapper`.
///
/// The buffer is stored flat, first axis most significant. The following invariant holds for every value of this type:
///
/// - `data.len() == dims.iter().product()`, a product that fits in `usize` (the empty product is 1, a scalar).
///
/// Neither the number of axes nor their extents change through any operation on the same object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseRepr<E> {
    dims: Vec<usize>,
    data: Vec<E>,
}

impl<E> DenseRepr<E> {
    /// Allocates a representation filled with `E::default()`.
    ///
    /// Fails with `SizeOverflow` if the extents multiply past `usize::MAX`.
    pub fn new(dims: Vec<usize>) -> Result<Self, TensorError>
    where
        E: Default + Clone,
    {
        let size = checked_size(&dims)?;
        Ok(Self {
            dims,
            data: vec![E::default(); size],
        })
    }

    /// Allocates a representation filled with zeros.
    pub fn zero(dims: Vec<usize>) -> Result<Self, TensorError>
    where
        E: Zero + Clone,
    {
        let size = checked_size(&dims)?;
        Ok(Self {
            dims,
            data: vec![E::zero(); size],
        })
    }

    /// Builds a representation from a flat row-major buffer, checking its length against `dims`.
    pub fn from_raw(dims: Vec<usize>, data: Vec<E>) -> Result<Self, TensorError> {
        let size = checked_size(&dims)?;
        if size != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: size,
                found: data.len(),
            });
        }
        Ok(unsafe { Self::from_raw_unchecked(dims, data) })
    }

    /// Builds a representation without checking the buffer length.
    ///
    /// # Safety
    ///
    /// The caller MUST ensure `data.len() == dims.iter().product()`.
    pub unsafe fn from_raw_unchecked(dims: Vec<usize>, data: Vec<E>) -> Self {
        Self { dims, data }
    }

    /// Decomposes into dims and flat buffer.
    pub fn into_raw(self) -> (Vec<usize>, Vec<E>) {
        (self.dims, self.data)
    }

    /// Number of axes.
    pub fn naxes(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Per-axis extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Flat row-major buffer.
    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Mutable flat buffer. Its length cannot be changed through a slice.
    pub fn data_mut(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Flattens a full positional coordinate into an index of the buffer.
    ///
    /// The index is accumulated as `index * dims[i] + position[i]` over the axes in order.
    pub fn index_of(&self, position: &[usize]) -> Result<usize, TensorError> {
        if position.len() != self.dims.len() {
            return Err(TensorError::RankMismatch {
                expected: self.dims.len(),
                found: position.len(),
            });
        }
        let mut index = 0;
        for (axis, (&p, &d)) in position.iter().zip(self.dims.iter()).enumerate() {
            if p >= d {
                return Err(TensorError::IndexOutOfRange {
                    axis,
                    index: p,
                    extent: d,
                });
            }
            index = index * d + p;
        }
        Ok(index)
    }

    /// Flattens a position WITHOUT checking its length or bounds.
    ///
    /// # Safety
    ///
    /// The caller MUST ensure `position.len() == self.naxes()` and `position[i] < self.dims()[i]` for every axis. Otherwise the result may point outside the buffer.
    pub unsafe fn index_of_unchecked(&self, position: &[usize]) -> usize {
        debug_assert_eq!(position.len(), self.dims.len());
        position
            .iter()
            .zip(self.dims.iter())
            .fold(0, |index, (&p, &d)| index * d + p)
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: &[usize]) -> Result<&E, TensorError> {
        let index = self.index_of(position)?;
        Ok(&self.data[index])
    }

    /// Returns the mutable element at `position`.
    pub fn get_mut(&mut self, position: &[usize]) -> Result<&mut E, TensorError> {
        let index = self.index_of(position)?;
        Ok(&mut self.data[index])
    }

    pub(crate) fn map<E2, F: FnMut(&E) -> E2>(&self, f: F) -> DenseRepr<E2> {
        DenseRepr {
            dims: self.dims.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }
}

/// Product of the extents, or `SizeOverflow` if it does not fit in `usize`.
pub fn checked_size(dims: &[usize]) -> Result<usize, TensorError> {
    dims.iter()
        .try_fold(1usize, |size, &d| size.checked_mul(d))
        .ok_or_else(|| TensorError::SizeOverflow {
            dims: dims.to_vec(),
        })
}
