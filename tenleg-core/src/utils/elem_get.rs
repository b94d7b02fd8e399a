//! Element access by position or by leg.

use alloc::{collections::BTreeMap, vec::Vec};

use crate::{args::LegCoords, error::TensorError, leg::Leg, tensor::Tensor};

impl<E> Tensor<E> {
    /// Flattens a full positional coordinate into an index of `data()`.
    pub fn index_of(&self, position: &[usize]) -> Result<usize, TensorError> {
        self.repr().index_of(position)
    }

    /// Flattens a position WITHOUT checking its length or bounds.
    ///
    /// # Safety
    ///
    /// See `DenseRepr::index_of_unchecked`.
    pub unsafe fn index_of_unchecked(&self, position: &[usize]) -> usize {
        unsafe { self.repr().index_of_unchecked(position) }
    }

    /// Arranges the coordinates of a leg-keyed map in this tensor's axis order.
    ///
    /// Every leg of the tensor must have an entry; keys of other legs are ignored. Bounds are not checked here.
    pub fn position_of<C: LegCoords + ?Sized>(&self, coords: &C) -> Result<Vec<usize>, TensorError> {
        self.mapper().translate(coords)
    }

    /// Returns the element at a positional coordinate.
    pub fn get(&self, position: &[usize]) -> Result<&E, TensorError> {
        self.repr().get(position)
    }

    /// Returns the mutable element at a positional coordinate.
    pub fn get_mut(&mut self, position: &[usize]) -> Result<&mut E, TensorError> {
        self.repr_mut().get_mut(position)
    }

    /// Returns the element at a leg-keyed coordinate.
    pub fn get_by_legs<C: LegCoords + ?Sized>(&self, coords: &C) -> Result<&E, TensorError> {
        let position = self.position_of(coords)?;
        self.get(&position)
    }

    /// Returns the mutable element at a leg-keyed coordinate.
    pub fn get_by_legs_mut<C: LegCoords + ?Sized>(
        &mut self,
        coords: &C,
    ) -> Result<&mut E, TensorError> {
        let position = self.position_of(coords)?;
        self.get_mut(&position)
    }
}

impl<E> core::ops::Index<&[usize]> for Tensor<E> {
    type Output = E;

    fn index(&self, position: &[usize]) -> &Self::Output {
        match self.get(position) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }
}
impl<E> core::ops::IndexMut<&[usize]> for Tensor<E> {
    fn index_mut(&mut self, position: &[usize]) -> &mut Self::Output {
        match self.get_mut(position) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<E, const N: usize> core::ops::Index<[usize; N]> for Tensor<E> {
    type Output = E;

    fn index(&self, position: [usize; N]) -> &Self::Output {
        &self[&position[..]]
    }
}
impl<E, const N: usize> core::ops::IndexMut<[usize; N]> for Tensor<E> {
    fn index_mut(&mut self, position: [usize; N]) -> &mut Self::Output {
        &mut self[&position[..]]
    }
}

impl<E> core::ops::Index<&BTreeMap<Leg, usize>> for Tensor<E> {
    type Output = E;

    fn index(&self, coords: &BTreeMap<Leg, usize>) -> &Self::Output {
        match self.get_by_legs(coords) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }
}
impl<E> core::ops::IndexMut<&BTreeMap<Leg, usize>> for Tensor<E> {
    fn index_mut(&mut self, coords: &BTreeMap<Leg, usize>) -> &mut Self::Output {
        match self.get_by_legs_mut(coords) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }
}
