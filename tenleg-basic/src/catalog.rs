//! Conventional leg names of lattice tensor networks.
//!
//! The catalog is the physical leg and the eight lattice directions, each bare and with the suffixes `1` to `9`, followed by the numbered legs `Leg0` to `Leg99`. `LegRegistry::with_catalog` registers them in exactly this order, so in such a registry `Phy` is id 0, `Up` is id 3 and `Leg99` is id 189.

/// Physical leg and lattice directions.
pub const DIRECTIONS: [&str; 9] = [
    "Phy",
    "Left",
    "Right",
    "Up",
    "Down",
    "LeftUp",
    "LeftDown",
    "RightUp",
    "RightDown",
];

/// Suffixes appended to each direction, in registration order.
pub const SUFFIXES: [&str; 10] = ["", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Prefix of the numbered legs.
pub const NUMBERED_PREFIX: &str = "Leg";

/// Count of numbered legs, `Leg0` to `Leg99`.
pub const NUMBERED_COUNT: usize = 100;

/// Total number of conventional names.
pub const CONVENTIONAL_LEG_COUNT: usize = DIRECTIONS.len() * SUFFIXES.len() + NUMBERED_COUNT;

/// Conventional names in registration order.
pub fn conventional_names() -> impl Iterator<Item = String> {
    let directional = SUFFIXES
        .iter()
        .flat_map(|suffix| DIRECTIONS.iter().map(move |dir| format!("{dir}{suffix}")));
    let numbered = (0..NUMBERED_COUNT).map(|n| format!("{NUMBERED_PREFIX}{n}"));
    directional.chain(numbered)
}
