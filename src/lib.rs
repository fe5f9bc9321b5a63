//! Conference typesetting
//!
//! Turns a conference-management session export into LaTeX sources: the
//! book of abstracts, the daily scientific program grid, per-room
//! schedules and per-day session sheets.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod layout;
pub mod models;
pub mod parse;
pub mod renderers;

// Re-export commonly used types
pub use config::{GeneratorConfig, LayoutConfig, OutputLayout};
pub use errors::{ConfigError, LayoutError, ReadError, RenderError};
pub use generator::{DocumentSelection, Generator};
pub use models::{Category, Contribution, Session};
