//! Program grid layout
//!
//! Packs the contributions of sessions that start at the same instant into
//! one table of fixed time-slot columns. Merged cells cover double-length
//! talks, nested tables cover minisymposia, and poster cohorts get a single
//! wide column.

pub mod slot_case;
pub mod geometry;
pub mod cohort;
pub mod grid;
pub mod packer;

// Re-export commonly used types
pub use cohort::{cohorts, Cohort, CohortLayout};
pub use geometry::TableGeometry;
pub use grid::{Cell, Grid, GridKind, GridRow};
pub use packer::{SlotTablePacker, PRIZE_PLACEHOLDER};
pub use slot_case::{SlotCase, SlotLengths};
