//! Error types for schedule conversion
//!
//! Every layer gets its own error enum. Reading and layout errors are fatal
//! for a run: the export is presumed to be validated upstream, so there is no
//! retry path anywhere.

use thiserror::Error;

/// Errors raised while reading the schedule export
#[derive(Debug, Error)]
pub enum ReadError {
    /// The CSV reader failed (malformed row, bad quoting, I/O)
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    /// A column every session row needs is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A timestamp did not match any supported format
    #[error("Invalid timestamp '{value}' in column {column}")]
    InvalidTimestamp { column: String, value: String },

    /// A session row with a blank start or end time
    #[error("Session {session} has no value in column {column}")]
    MissingSessionTime { session: String, column: String },

    /// Session ends before it starts
    #[error("Session {session} ends before it starts")]
    InvertedTimes { session: String },

    /// A scheduled contribution without start or end time
    #[error("Contribution p{slot} of session {session} has no start/end time")]
    MissingSlotTime { session: String, slot: usize },
}

/// Errors raised by the slot-table packer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Contribution length matches none of the configured slot lengths
    #[error("Non-standard contribution length of {minutes} minutes in session {session}, slot p{slot}")]
    UnrecognizedDuration {
        session: String,
        slot: usize,
        minutes: i64,
    },
}

/// Errors raised while emitting documents
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Table layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] mustache::Error),

    #[error("Writing output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading the generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Reading config file failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Slot lengths that make classification or column arithmetic impossible
    #[error("Invalid slot configuration: {0}")]
    InvalidSlots(String),
}
