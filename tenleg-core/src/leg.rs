//! Leg identities.

use core::fmt;

/// Raw integer identity of a leg.
pub type LegId = i32;

/// Identity of one tensor axis.
///
/// A leg is a plain value: only `id` takes part in equality, ordering and hashing. The human-readable name of a leg, if any, lives in a registry (see `tenleg_basic::registry::LegRegistry`) and is never consulted for comparison.
///
/// The ordering by id carries no meaning beyond creation order; it exists so that legs can key ordered maps and sets.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Leg {
    id: LegId,
}

impl Leg {
    /// Wraps `id` directly, without interning.
    ///
    /// Nothing prevents `id` from coinciding with an id a registry handed out for some name; two such legs compare equal. Use this only for ids agreed on in advance.
    pub const fn from_id(id: LegId) -> Self {
        Self { id }
    }

    /// Returns the raw id.
    pub const fn id(&self) -> LegId {
        self.id
    }
}

impl fmt::Debug for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leg({})", self.id)
    }
}

impl From<LegId> for Leg {
    fn from(id: LegId) -> Self {
        Self::from_id(id)
    }
}
