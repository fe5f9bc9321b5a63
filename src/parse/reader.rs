//! Session export reader
//!
//! The export is a `;`-delimited, `"`-quoted table with one row per session.
//! Per-contribution data sits in numbered column groups `p{N}_title`,
//! `p{N}_authors`, `p{N}_organisations`, `p{N}_presenting_author`,
//! `p{N}_abstract`, `p{N}_start` and `p{N}_end`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ReadError;
use crate::models::{Category, Session, SlotFields};
use crate::parse::timestamp::parse_timestamp;

/// Matches the title column of a contribution slot group
static SLOT_TITLE_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^p(\d+)_title$").expect("static regex"));

const REQUIRED_COLUMNS: &[&str] = &[
    "session_short",
    "session_title",
    "session_room",
    "session_start",
    "session_end",
];

const MAX_CHAIRS: usize = 3;

type Row = HashMap<String, String>;

/// Read all sessions from an export file on disk
pub fn read_sessions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Session>, ReadError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_sessions(file)
}

/// Read all sessions from any byte source
pub fn read_sessions<R: Read>(source: R) -> Result<Vec<Session>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ReadError::MissingColumn(column.to_string()));
        }
    }
    let slot_count = headers
        .iter()
        .filter_map(|h| SLOT_TITLE_COLUMN.captures(h))
        .filter_map(|caps| caps[1].parse::<usize>().ok())
        .max()
        .unwrap_or(0);

    let mut sessions = Vec::new();
    for row in reader.deserialize::<Row>() {
        sessions.push(session_from_row(&row?, slot_count)?);
    }

    log::info!(
        "Read {} sessions with up to {} contribution slots",
        sessions.len(),
        slot_count
    );
    Ok(sessions)
}

/// Field value, treating blanks and the export's `nan` as absent
fn field(row: &Row, column: &str) -> Option<String> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty() && *value != "nan")
        .map(str::to_string)
}

fn required(row: &Row, column: &str) -> Result<String, ReadError> {
    // Header presence is checked up front, so a blank here is just an empty value
    Ok(field(row, column).unwrap_or_default())
}

fn timestamp(row: &Row, column: &str) -> Result<Option<chrono::NaiveDateTime>, ReadError> {
    field(row, column)
        .map(|value| parse_timestamp(column, &value))
        .transpose()
}

fn session_from_row(row: &Row, slot_count: usize) -> Result<Session, ReadError> {
    let id = required(row, "session_short")?;
    let session_time = |column: &str| -> Result<chrono::NaiveDateTime, ReadError> {
        timestamp(row, column)?.ok_or_else(|| ReadError::MissingSessionTime {
            session: id.clone(),
            column: column.to_string(),
        })
    };
    let start = session_time("session_start")?;
    let end = session_time("session_end")?;
    if end < start {
        return Err(ReadError::InvertedTimes { session: id });
    }

    let chairs = (1..=MAX_CHAIRS)
        .filter_map(|k| field(row, &format!("chair{}_name", k)).or_else(|| field(row, &format!("chair{}", k))))
        .collect();

    let is_poster = Category::from_session_id(&id) == Category::Poster;
    let mut slots = Vec::with_capacity(slot_count);
    for n in 1..=slot_count {
        let slot = SlotFields {
            title: field(row, &format!("p{}_title", n)),
            authors: field(row, &format!("p{}_authors", n)),
            organisations: field(row, &format!("p{}_organisations", n)),
            presenting_author: field(row, &format!("p{}_presenting_author", n)),
            abstract_html: field(row, &format!("p{}_abstract", n)),
            start: timestamp(row, &format!("p{}_start", n))?,
            end: timestamp(row, &format!("p{}_end", n))?,
        };
        let scheduled = slot.presenting_author.is_some();
        if scheduled && !is_poster && (slot.start.is_none() || slot.end.is_none()) {
            return Err(ReadError::MissingSlotTime {
                session: id,
                slot: n,
            });
        }
        slots.push(slot);
    }

    Ok(Session {
        title: required(row, "session_title")?,
        room: required(row, "session_room")?,
        id,
        start,
        end,
        chairs,
        slots,
    })
}
