//! Parsing module for the registration-tool export
//!
//! This module turns the `;`-delimited session export (and the optional
//! organizers export) into immutable [`Session`](crate::models::Session)
//! records.

pub mod reader;
pub mod timestamp;
pub mod organizers;

// Re-export commonly used types
pub use organizers::{read_organizers, read_organizers_from_path, Organizer, OrganizerDirectory};
pub use reader::{read_sessions, read_sessions_from_path};
pub use timestamp::parse_timestamp;
