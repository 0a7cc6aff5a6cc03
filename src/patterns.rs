use crate::engine::Coord;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

/// Built-in seeds, selectable by name.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(10, 10), (11, 11), (12, 11), (10, 12), (11, 12)],
    },
    Pattern {
        name: "oscillator",
        cells: &[(10, 10), (10, 11), (10, 12)],
    },
];

/// Returns the seed registered under `name`. Unknown names yield an empty
/// seed, so the simulation starts all dead.
pub fn lookup(name: &str) -> &'static [Coord] {
    match PATTERNS.iter().find(|p| p.name == name) {
        Some(pattern) => pattern.cells,
        None => {
            tracing::debug!(name, "unknown pattern, using empty seed");
            &[]
        }
    }
}
