//! Session categories
//!
//! The category of a session is encoded in the prefix of its identifier
//! (`PL2`, `MS04_01`, `Poster1`, ...). It decides which chapter a session
//! lands in and how its contributions are laid out in the program grid.

/// Session category, derived from the identifier prefix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Prandtl Memorial Lecture (`PML`)
    Prandtl,
    /// Plenary lecture (`PL`)
    Plenary,
    /// Minisymposium (`MS`)
    Minisymposium,
    /// Young Researchers Minisymposium (`YRM`)
    YoungResearcher,
    /// DFG priority programs and research training groups (`DFG`)
    Dfg,
    /// Poster session (`Poster`)
    Poster,
    /// Richard von Mises prize lecture (`RvML`)
    PrizeLecture,
    /// Everything else: contributed sections
    Contributed,
}

/// Prefix table. Order matters only where prefixes overlap.
const PREFIXES: &[(&str, Category)] = &[
    ("PML", Category::Prandtl),
    ("PL", Category::Plenary),
    ("MS", Category::Minisymposium),
    ("YRM", Category::YoungResearcher),
    ("DFG", Category::Dfg),
    ("Poster", Category::Poster),
    ("RvML", Category::PrizeLecture),
];

impl Category {
    /// Classify a session identifier
    pub fn from_session_id(id: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| id.starts_with(prefix))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Contributed)
    }

    /// Minisymposia of both kinds share the nested-table layout
    pub fn is_minisymposium(&self) -> bool {
        matches!(self, Category::Minisymposium | Category::YoungResearcher)
    }
}

/// Block part of a session identifier: everything before the first `.` or `_`
///
/// `A04_06` and `A04_01` both belong to block `A04`, `S06c.05` to `S06c`.
pub fn session_block(id: &str) -> &str {
    id.split(|c: char| c == '.' || c == '_').next().unwrap_or(id)
}
