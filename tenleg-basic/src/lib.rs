//! Basic implementors for tenleg: the leg registry and the conventional leg catalog.

pub mod catalog;

pub mod registry;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::catalog::{CONVENTIONAL_LEG_COUNT, conventional_names};
    pub use crate::registry::{LegDisplay, LegRegistry};
}
