//! Contributions (talks, posters, lectures)
//!
//! A contribution is never stored on its own. It is derived on demand from
//! the numbered `p{N}_*` field group of a session row, see
//! [`Session::contribution`](super::Session::contribution).

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Footnote markers the export appends to presenter names: `Doe, Jane (1,2),`
static PRESENTER_FOOTNOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\s*\(\d+(,\d+)*\))?,?$").expect("static regex"));

/// A single contribution within a session
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub title: String,
    /// Author list with the presenting author wrapped in `\presenter{..}`
    pub authors: String,
    /// Presenting author with footnote markers removed
    pub presenter: String,
    pub organisations: String,
    /// Raw abstract markup from the export, empty when absent
    pub abstract_html: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    /// Length in minutes; always 0 for poster contributions
    pub duration: i64,
}

impl Contribution {
    /// Organisations with one line per organisation
    pub fn organisation_lines(&self) -> String {
        self.organisations.replace("; ", "\\newline ")
    }

    /// Start time as `HH:MM`, empty for posters without a time
    pub fn start_label(&self) -> String {
        self.start
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// End time as `HH:MM`, empty for posters without a time
    pub fn end_label(&self) -> String {
        self.end
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Remove the organisation footnote markers from a presenter name
pub fn strip_author_footnotes(name: &str) -> String {
    PRESENTER_FOOTNOTE.replace(name, "").into_owned()
}

/// Mark the presenting author inside the raw author list
pub(crate) fn mark_presenter(authors: &str, raw_presenter: &str) -> String {
    if raw_presenter.is_empty() {
        return authors.to_string();
    }
    authors.replace(raw_presenter, &format!("\\presenter{{{}}}", raw_presenter))
}
