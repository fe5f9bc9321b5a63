//! Models module for conference schedule data
//!
//! This module contains the read-only records derived from the
//! registration-tool export: sessions, their category and the
//! contributions presented in them.

pub mod category;
pub mod session;
pub mod contribution;

// Re-export commonly used types
pub use category::{session_block, Category};
pub use contribution::{strip_author_footnotes, Contribution};
pub use session::{Session, SlotFields};
