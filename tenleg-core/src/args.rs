//! useful args when legs involved

use alloc::collections::BTreeMap;

use crate::leg::Leg;

/// Builds a leg→coordinate map for named element access.
///
/// ```
/// use tenleg_core::{leg::Leg, lm};
/// let (up, down) = (Leg::from_id(0), Leg::from_id(1));
/// let coords = lm![up => 1, down => 2];
/// assert_eq!(coords[&down], 2);
/// ```
#[macro_export]
macro_rules! lm {
    ( $( $x:expr => $y:expr ),* $(,)? ) => {
        $crate::args::_from_array_pair([$($x),*], [$($y),*])
    };
}

#[doc(hidden)]
pub fn _from_array_pair<const N: usize>(keys: [Leg; N], values: [usize; N]) -> BTreeMap<Leg, usize> {
    keys.into_iter().zip(values).collect()
}

/// Lookup of a coordinate by leg.
///
/// Implemented for the usual shapes of a name-keyed coordinate: ordered maps and (leg, coordinate) pair lists. With pair lists, the first pair for a leg wins.
pub trait LegCoords {
    /// Returns the coordinate given for `leg`, if any.
    fn coord(&self, leg: &Leg) -> Option<usize>;
}

impl LegCoords for BTreeMap<Leg, usize> {
    fn coord(&self, leg: &Leg) -> Option<usize> {
        self.get(leg).copied()
    }
}

impl LegCoords for [(Leg, usize)] {
    fn coord(&self, leg: &Leg) -> Option<usize> {
        self.iter().find(|(l, _)| l == leg).map(|&(_, c)| c)
    }
}

impl<const N: usize> LegCoords for [(Leg, usize); N] {
    fn coord(&self, leg: &Leg) -> Option<usize> {
        self.as_slice().coord(leg)
    }
}

impl<C: LegCoords + ?Sized> LegCoords for &C {
    fn coord(&self, leg: &Leg) -> Option<usize> {
        (**self).coord(leg)
    }
}
