//! Elementwise operators.
//!
//! Every operator keeps the extents and legs of its operand; only elements change, or a new tensor with the same axis structure is produced. Binary operators pair elements by flat index only: the two operands must agree in `size()`, but their extents and legs are never compared.

use alloc::vec::Vec;

use crate::{error::TensorError, repr::DenseRepr, tensor::Tensor};

impl<E> Tensor<E> {
    /// Overwrites every element with successive results of `producer`, in increasing flat-index order.
    ///
    /// `producer` is called exactly once per element, so a closure holding a counter fills the tensor with a row-major sequence.
    pub fn generate<F: FnMut() -> E>(&mut self, mut producer: F) {
        for e in self.data_mut().iter_mut() {
            *e = producer();
        }
    }

    /// Replaces every element `x` with `f(&x)`.
    pub fn map_in_place<F: FnMut(&E) -> E>(&mut self, mut f: F) {
        for e in self.data_mut().iter_mut() {
            *e = f(e);
        }
    }

    /// Builds a tensor with the same extents and legs whose elements are `f` of this tensor's.
    pub fn map_to_new<E2, F: FnMut(&E) -> E2>(&self, f: F) -> Tensor<E2> {
        let repr = self.repr().map(f);
        unsafe { Tensor::from_raw_unchecked(repr, self.mapper().clone()) }
    }

    /// Replaces every element `x` at flat index `i` with `f(&x, &other.data()[i])`.
    ///
    /// Fails with `ShapeMismatch` when the sizes differ; nothing is modified in that case.
    pub fn zip_in_place<E2, F: FnMut(&E, &E2) -> E>(
        &mut self,
        other: &Tensor<E2>,
        f: F,
    ) -> Result<(), TensorError> {
        check_size(self.size(), other.size())?;
        unsafe { self.zip_in_place_unchecked(other, f) };
        Ok(())
    }

    /// Same as `zip_in_place`, WITHOUT checking the sizes.
    ///
    /// # Safety
    ///
    /// The caller MUST ensure `self.size() == other.size()`. Otherwise only the common prefix is processed, silently.
    pub unsafe fn zip_in_place_unchecked<E2, F: FnMut(&E, &E2) -> E>(
        &mut self,
        other: &Tensor<E2>,
        mut f: F,
    ) {
        for (e, o) in self.data_mut().iter_mut().zip(other.data()) {
            *e = f(e, o);
        }
    }

    /// Builds a tensor shaped like `a` whose element at flat index `i` is `f(&a.data()[i], &b.data()[i])`.
    ///
    /// Fails with `ShapeMismatch` when the sizes of `a` and `b` differ.
    pub fn zip_to_new<E1, E2, F: FnMut(&E1, &E2) -> E>(
        a: &Tensor<E1>,
        b: &Tensor<E2>,
        mut f: F,
    ) -> Result<Self, TensorError> {
        check_size(a.size(), b.size())?;
        let data: Vec<E> = a.data().iter().zip(b.data()).map(|(x, y)| f(x, y)).collect();
        let repr = unsafe { DenseRepr::from_raw_unchecked(a.dims().to_vec(), data) };
        Ok(unsafe { Tensor::from_raw_unchecked(repr, a.mapper().clone()) })
    }
}

fn check_size(expected: usize, found: usize) -> Result<(), TensorError> {
    if expected != found {
        return Err(TensorError::ShapeMismatch { expected, found });
    }
    Ok(())
}
