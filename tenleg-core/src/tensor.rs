//! Layer 2 tensor concept: tensor with axes each identified by a leg.

use alloc::vec::Vec;
use num_traits::Zero;

use crate::{error::TensorError, leg::Leg, mapper::LegMapper, repr::DenseRepr};

/// A dense tensor whose axes are addressed by legs.
///
/// In the conceptual model, a tensor is a rectangular array with multiple axes, each identified by a `Leg`. Nothing stops two axes from carrying the same leg; such axes then always receive the same coordinate through leg-keyed access. Use `require_unique_legs` where that is not wanted.
///
/// In practice, this struct is the compound of a representation (`DenseRepr`, dims and flat data) and a mapper (`LegMapper`, the leg of each axis), ensuring "leg structure":
///
/// - `repr.naxes() == mapper.naxes()`, the rank of the tensor;
/// - the `i`-th extent and the `i`-th leg always describe the same axis;
/// - neither the extents nor the legs change for the same object, even through mutable operations. Only the elements do.
///
/// Reordering or reshaping would break the pairing above and is not offered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tensor<E> {
    repr: DenseRepr<E>,
    mapper: LegMapper,
}

impl<E> Tensor<E> {
    /// Creates a tensor of `E::default()` elements with the given extents and legs.
    ///
    /// Fails with `RankMismatch` if `dims` and `legs` differ in length and with `SizeOverflow` if the element count does not fit in `usize`. Repeated legs are accepted.
    pub fn new(dims: Vec<usize>, legs: Vec<Leg>) -> Result<Self, TensorError>
    where
        E: Default + Clone,
    {
        check_rank(&dims, &legs)?;
        let repr = DenseRepr::new(dims)?;
        Ok(unsafe { Self::from_raw_unchecked(repr, LegMapper::from_raw(legs)) })
    }

    /// Creates a tensor of zeros; otherwise as `new`.
    pub fn zeros(dims: Vec<usize>, legs: Vec<Leg>) -> Result<Self, TensorError>
    where
        E: Zero + Clone,
    {
        check_rank(&dims, &legs)?;
        let repr = DenseRepr::zero(dims)?;
        Ok(unsafe { Self::from_raw_unchecked(repr, LegMapper::from_raw(legs)) })
    }

    /// Creates a tensor around an existing row-major buffer.
    pub fn from_data(dims: Vec<usize>, legs: Vec<Leg>, data: Vec<E>) -> Result<Self, TensorError> {
        check_rank(&dims, &legs)?;
        let repr = DenseRepr::from_raw(dims, data)?;
        Ok(unsafe { Self::from_raw_unchecked(repr, LegMapper::from_raw(legs)) })
    }

    /// Passes the tensor through only if no two axes carry the same leg.
    ///
    /// ```
    /// # use tenleg_core::prelude::*;
    /// let (a, b) = (Leg::from_id(0), Leg::from_id(1));
    /// assert!(Tensor::<f64>::new(vec![2, 2], vec![a, b]).unwrap().require_unique_legs().is_ok());
    /// assert_eq!(
    ///     Tensor::<f64>::new(vec![2, 2], vec![a, a]).unwrap().require_unique_legs(),
    ///     Err(TensorError::DuplicateLeg(a))
    /// );
    /// ```
    pub fn require_unique_legs(self) -> Result<Self, TensorError> {
        match self.mapper.duplicate() {
            Some(leg) => Err(TensorError::DuplicateLeg(leg)),
            None => Ok(self),
        }
    }

    /// Create a tensor from raw representation and mapper, checking the invariant `repr.naxes() == mapper.naxes()`.
    pub fn from_raw(repr: DenseRepr<E>, mapper: LegMapper) -> Result<Self, (DenseRepr<E>, LegMapper)> {
        if repr.naxes() == mapper.naxes() {
            Ok(unsafe { Self::from_raw_unchecked(repr, mapper) })
        } else {
            Err((repr, mapper))
        }
    }

    /// Create a tensor from raw representation and mapper without checking the invariant `repr.naxes() == mapper.naxes()`.
    ///
    /// # Safety
    ///
    /// caller must ensure the invariant `repr.naxes() == mapper.naxes()`
    pub unsafe fn from_raw_unchecked(repr: DenseRepr<E>, mapper: LegMapper) -> Self {
        Self { repr, mapper }
    }

    /// Decompose the tensor into raw representation and mapper.
    pub fn into_raw(self) -> (DenseRepr<E>, LegMapper) {
        (self.repr, self.mapper)
    }

    /// Get the immutable reference to the representation of the tensor.
    pub fn repr(&self) -> &DenseRepr<E> {
        &self.repr
    }

    /// Get the immutable reference to the mapper of the tensor.
    pub fn mapper(&self) -> &LegMapper {
        &self.mapper
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.mapper.naxes()
    }

    /// Total number of elements, the product of the extents.
    pub fn size(&self) -> usize {
        self.repr.size()
    }

    /// Extents in axis order.
    pub fn dims(&self) -> &[usize] {
        self.repr.dims()
    }

    /// Legs in axis order.
    pub fn legs(&self) -> &[Leg] {
        self.mapper.legs()
    }

    /// Flat row-major elements.
    pub fn data(&self) -> &[E] {
        self.repr.data()
    }

    /// Mutable flat row-major elements.
    pub fn data_mut(&mut self) -> &mut [E] {
        self.repr.data_mut()
    }

    /// First axis position carrying `leg`.
    pub fn axis_of(&self, leg: &Leg) -> Option<usize> {
        self.mapper.axis_of(leg)
    }

    /// Extent of the axis carrying `leg`.
    pub fn dim_of(&self, leg: &Leg) -> Option<usize> {
        self.axis_of(leg).map(|axis| self.dims()[axis])
    }

    pub(crate) fn repr_mut(&mut self) -> &mut DenseRepr<E> {
        &mut self.repr
    }
}

fn check_rank(dims: &[usize], legs: &[Leg]) -> Result<(), TensorError> {
    if dims.len() != legs.len() {
        return Err(TensorError::RankMismatch {
            expected: dims.len(),
            found: legs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn legs(ids: &[i32]) -> Vec<Leg> {
        ids.iter().copied().map(Leg::from_id).collect()
    }

    #[test]
    fn construction() {
        let t = Tensor::<f64>::new(vec![2, 3, 4], legs(&[0, 1, 2])).unwrap();
        assert_eq!(t.rank(), 3);
        assert_eq!(t.size(), 24);
        assert_eq!(t.dims(), &[2, 3, 4]);
        assert_eq!(t.legs(), legs(&[0, 1, 2]).as_slice());
        assert!(t.data().iter().all(|&x| x == 0.0));
        assert_eq!(t.dim_of(&Leg::from_id(1)), Some(3));
    }

    #[test]
    fn scalar_tensor() {
        let t = Tensor::<i32>::zeros(vec![], vec![]).unwrap();
        assert_eq!(t.rank(), 0);
        assert_eq!(t.size(), 1);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Tensor::<f64>::new(vec![2, 3], legs(&[0])),
            Err(TensorError::RankMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Tensor::<u8>::new(vec![usize::MAX, 2], legs(&[0, 1])),
            Err(TensorError::SizeOverflow {
                dims: vec![usize::MAX, 2]
            })
        );
        assert_eq!(
            Tensor::<u8>::zeros(vec![1 << (usize::BITS - 1), 2], legs(&[0, 1])),
            Err(TensorError::SizeOverflow {
                dims: vec![1 << (usize::BITS - 1), 2]
            })
        );
        assert_eq!(
            Tensor::<u8>::from_data(vec![usize::MAX, 3], legs(&[0, 1]), vec![]),
            Err(TensorError::SizeOverflow {
                dims: vec![usize::MAX, 3]
            })
        );
        assert_eq!(
            Tensor::from_data(vec![2, 3], legs(&[0, 1]), vec![1; 5]),
            Err(TensorError::ShapeMismatch {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn repeated_legs_are_accepted() {
        let mut t = Tensor::<i32>::new(vec![2, 2], legs(&[3, 3])).unwrap();
        assert_eq!(t.rank(), 2);
        assert_eq!(t.axis_of(&Leg::from_id(3)), Some(0));
        t.data_mut().copy_from_slice(&[10, 11, 12, 13]);
        let coords = [(Leg::from_id(3), 1)];
        assert_eq!(t.position_of(&coords), Ok(vec![1, 1]));
        assert_eq!(t.get_by_legs(&coords), Ok(&13));
        assert_eq!(
            t.clone().require_unique_legs(),
            Err(TensorError::DuplicateLeg(Leg::from_id(3)))
        );
        let z = Tensor::<f64>::zeros(vec![3, 1, 3], legs(&[5, 6, 5])).unwrap();
        assert_eq!(z.size(), 9);
        let d = Tensor::from_data(vec![2, 2], legs(&[4, 4]), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(d.get_by_legs(&[(Leg::from_id(4), 0)]), Ok(&1));
    }

    #[test]
    fn from_raw_checks_naxes() {
        let repr = DenseRepr::<u8>::new(vec![2, 2]).unwrap();
        let mapper = LegMapper::from_raw(legs(&[0]));
        let (repr, _) = Tensor::from_raw(repr, mapper).unwrap_err();
        let mapper = LegMapper::from_raw(legs(&[0, 1]));
        let t = Tensor::from_raw(repr, mapper).unwrap();
        let (repr, mapper) = t.into_raw();
        assert_eq!(repr.dims(), &[2, 2]);
        assert_eq!(mapper.naxes(), 2);
    }
}
