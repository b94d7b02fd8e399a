//! Mapper concept: translator between layer 1 (positional) and layer 2 (leg) axis descriptions.

use alloc::vec::Vec;

use crate::{args::LegCoords, error::TensorError, leg::Leg};

/// Ordered sequence of legs, one per axis of the bound representation.
///
/// In the logical model, a mapper is a mapping from usize indices `0`, `1`, ..., `naxes()-1`, each representing an axis, to legs. It need not be injective: two axes may carry the same leg, in which case a leg-keyed coordinate feeds the same value to both. `try_unique` opts into the stricter, locally unique form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegMapper(Vec<Leg>);

impl LegMapper {
    /// Wraps `raw` as is, repeated legs included.
    pub fn from_raw(raw: Vec<Leg>) -> Self {
        LegMapper(raw)
    }

    /// Wraps `raw`, rejecting it with `DuplicateLeg` if some leg repeats.
    pub fn try_unique(raw: Vec<Leg>) -> Result<Self, TensorError> {
        match find_duplicate(&raw) {
            Some(leg) => Err(TensorError::DuplicateLeg(leg)),
            None => Ok(LegMapper(raw)),
        }
    }

    /// First leg carried by more than one axis, if any.
    pub fn duplicate(&self) -> Option<Leg> {
        find_duplicate(&self.0)
    }

    /// Returns the leg sequence.
    pub fn into_raw(self) -> Vec<Leg> {
        self.0
    }

    /// Number of axes.
    pub fn naxes(&self) -> usize {
        self.0.len()
    }

    /// Legs in axis order.
    pub fn legs(&self) -> &[Leg] {
        &self.0
    }

    /// First axis position carrying `leg`.
    pub fn axis_of(&self, leg: &Leg) -> Option<usize> {
        self.0.iter().position(|l| l == leg)
    }

    /// Arranges the coordinates in `coords` in axis order.
    ///
    /// Keys of `coords` that are not legs of this mapper are ignored. Every axis carrying the same leg receives the same coordinate.
    pub fn translate<C: LegCoords + ?Sized>(&self, coords: &C) -> Result<Vec<usize>, TensorError> {
        self.0
            .iter()
            .map(|leg| coords.coord(leg).ok_or(TensorError::UnknownLeg(*leg)))
            .collect()
    }
}

fn find_duplicate(legs: &[Leg]) -> Option<Leg> {
    for i in 0..legs.len() {
        for j in (i + 1)..legs.len() {
            if legs[i] == legs[j] {
                return Some(legs[i]);
            }
        }
    }
    None
}
