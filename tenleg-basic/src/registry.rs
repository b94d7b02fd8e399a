//! Leg registry: interning of leg names into `Leg` ids and display of ids by name.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::OnceLock,
};

use parking_lot::RwLock;
use tenleg_core::leg::{Leg, LegId};
use tracing::{debug, trace};

use crate::catalog::conventional_names;

#[derive(Debug, Default)]
struct Tables {
    next: LegId,
    name2id: HashMap<String, LegId>,
    id2name: BTreeMap<LegId, String>,
}

/// Interner from leg names to `Leg`s.
///
/// The first `leg_from_name` of a name allocates the next id, counting from 0; later calls return the same leg. Both directions of the association are kept for the lifetime of the registry, so a leg can be printed by name.
///
/// Lookup and allocation are serialized by an internal lock, so a registry can be shared between threads.
#[derive(Debug, Default)]
pub struct LegRegistry {
    tables: RwLock<Tables>,
}

impl LegRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the conventional leg names, in catalog order.
    pub fn with_catalog() -> Self {
        let registry = Self::new();
        let mut count = 0;
        for name in conventional_names() {
            registry.leg_from_name(&name);
            count += 1;
        }
        debug!(count, "preloaded conventional legs");
        registry
    }

    /// Process-wide registry, preloaded with the conventional leg names on first use.
    pub fn global() -> &'static LegRegistry {
        static GLOBAL: OnceLock<LegRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LegRegistry::with_catalog)
    }

    /// Returns the leg registered under `name`, registering it first if needed.
    pub fn leg_from_name(&self, name: &str) -> Leg {
        if let Some(leg) = self.lookup(name) {
            return leg;
        }
        let mut tables = self.tables.write();
        // another writer may have registered it between the two locks
        if let Some(&id) = tables.name2id.get(name) {
            return Leg::from_id(id);
        }
        let id = tables.next;
        tables.next += 1;
        tables.name2id.insert(name.to_owned(), id);
        tables.id2name.insert(id, name.to_owned());
        trace!(name, id, "registered leg");
        Leg::from_id(id)
    }

    /// Wraps `id` without touching the registry. See `Leg::from_id` for the collision hazard.
    pub fn leg_from_id(&self, id: LegId) -> Leg {
        Leg::from_id(id)
    }

    /// Returns the leg registered under `name` without registering.
    pub fn lookup(&self, name: &str) -> Option<Leg> {
        self.tables.read().name2id.get(name).copied().map(Leg::from_id)
    }

    /// Returns the registered name of `leg`, if any.
    pub fn name_of(&self, leg: Leg) -> Option<String> {
        self.tables.read().id2name.get(&leg.id()).cloned()
    }

    /// Returns the registered name of `leg`, or `UserDefinedLeg<id>` for ids never registered here.
    pub fn display_name(&self, leg: Leg) -> String {
        self.display(leg).to_string()
    }

    /// `fmt::Display` adaptor writing the same text as `display_name`.
    pub fn display(&self, leg: Leg) -> LegDisplay<'_> {
        LegDisplay {
            registry: self,
            leg,
        }
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.tables.read().id2name.len()
    }

    /// Whether no name is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered names in id order.
    pub fn names(&self) -> Vec<String> {
        self.tables.read().id2name.values().cloned().collect()
    }
}

/// Display of a leg through a registry.
#[derive(Clone, Copy)]
pub struct LegDisplay<'a> {
    registry: &'a LegRegistry,
    leg: Leg,
}

impl fmt::Display for LegDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.registry.tables.read().id2name.get(&self.leg.id()) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "UserDefinedLeg{}", self.leg.id()),
        }
    }
}

impl fmt::Debug for LegDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({:?})", self, self.leg)
    }
}
