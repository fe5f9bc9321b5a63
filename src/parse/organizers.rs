//! Section organizers export
//!
//! Optional second export listing the organizers of each section. Only rows
//! with a `track_type` take part in the lookup; exports without that column
//! simply never match and sections render without organizers.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ReadError;

/// Prefix remaps between session identifiers and organizer track names
const TRACK_REMAPS: &[(&str, &str)] = &[("DFG-PP", "SPP"), ("DFG-GRK", "GRK")];

/// One organizer row
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Organizer {
    #[serde(default)]
    pub track_type: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub organisation: String,
}

/// All organizers, sorted by track
#[derive(Clone, Debug, Default)]
pub struct OrganizerDirectory {
    organizers: Vec<Organizer>,
}

impl OrganizerDirectory {
    pub fn new(mut organizers: Vec<Organizer>) -> Self {
        organizers.retain(|o| o.track_type.as_deref().is_some_and(|t| !t.trim().is_empty()));
        organizers.sort_by(|a, b| a.track_type.cmp(&b.track_type));
        Self { organizers }
    }

    pub fn len(&self) -> usize {
        self.organizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizers.is_empty()
    }

    /// Organizer lines and track title for a section block
    ///
    /// Returns `None` when no organizer track starts with the (remapped) block.
    pub fn lookup(&self, block: &str) -> Option<(String, String)> {
        let key = remap_track(block);
        let matching: Vec<&Organizer> = self
            .organizers
            .iter()
            .filter(|o| o.track_type.as_deref().is_some_and(|t| track_matches(t, &key)))
            .collect();
        let last = matching.last()?;

        let lines = matching
            .iter()
            .map(|o| format!("{}, {} {{\\em ({})}}", o.name, o.firstname, o.organisation))
            .collect::<Vec<_>>()
            .join("\\newline ");
        Some((last.track_type.clone().unwrap_or_default(), lines))
    }
}

/// `MS1` matches `MS1 Waves` and `MS1: Waves` but not `MS10 Flows`
fn track_matches(track: &str, block: &str) -> bool {
    match track.strip_prefix(block) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_alphanumeric()),
        None => false,
    }
}

fn remap_track(block: &str) -> String {
    for (from, to) in TRACK_REMAPS {
        if let Some(rest) = block.strip_prefix(from) {
            return format!("{}{}", to, rest);
        }
    }
    block.to_string()
}

/// Read the organizers export from any byte source
pub fn read_organizers<R: Read>(source: R) -> Result<OrganizerDirectory, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .from_reader(source);
    let organizers = reader
        .deserialize::<Organizer>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(OrganizerDirectory::new(organizers))
}

pub fn read_organizers_from_path<P: AsRef<Path>>(path: P) -> Result<OrganizerDirectory, ReadError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_organizers(file)
}
