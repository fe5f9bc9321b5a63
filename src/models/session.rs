//! Session records
//!
//! A session groups consecutive contributions in one room under one chair.
//! Sessions are produced by the reader and never mutated afterwards.

use chrono::NaiveDateTime;

use super::category::{session_block, Category};
use super::contribution::{mark_presenter, strip_author_footnotes, Contribution};

/// Raw `p{N}_*` field group of one contribution slot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotFields {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub organisations: Option<String>,
    pub presenting_author: Option<String>,
    pub abstract_html: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// One session of the conference schedule
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Category-coded identifier (`A04_06`, `PL2`, `RvML`, ...)
    pub id: String,
    pub title: String,
    pub room: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Up to three chair names, in column order
    pub chairs: Vec<String>,
    /// Contribution slots; index 0 holds `p1_*`
    pub slots: Vec<SlotFields>,
}

impl Session {
    pub fn category(&self) -> Category {
        Category::from_session_id(&self.id)
    }

    pub fn block(&self) -> &str {
        session_block(&self.id)
    }

    /// Session length in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn first_chair(&self) -> Option<&str> {
        self.chairs.first().map(String::as_str)
    }

    /// All chairs separated by forced line breaks
    pub fn chair_lines(&self) -> String {
        self.chairs.join(" \\newline ")
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Derive the contribution at a 1-based slot index.
    ///
    /// Returns `None` when the slot does not exist or has no presenting
    /// author, which is how withdrawn or unassigned slots appear in the export.
    pub fn contribution(&self, index: usize) -> Option<Contribution> {
        let slot = self.slots.get(index.checked_sub(1)?)?;
        let raw_presenter = slot.presenting_author.as_deref()?;

        let authors = mark_presenter(slot.authors.as_deref().unwrap_or_default(), raw_presenter);
        let duration = match (self.category(), slot.start, slot.end) {
            (Category::Poster, _, _) => 0,
            (_, Some(start), Some(end)) => (end - start).num_minutes(),
            _ => 0,
        };

        Some(Contribution {
            title: slot.title.clone().unwrap_or_default(),
            authors,
            presenter: strip_author_footnotes(raw_presenter),
            organisations: slot.organisations.clone().unwrap_or_default(),
            abstract_html: slot.abstract_html.clone().unwrap_or_default(),
            start: slot.start,
            end: slot.end,
            duration,
        })
    }

    /// All present contributions in slot order
    pub fn contributions(&self) -> impl Iterator<Item = Contribution> + '_ {
        (1..=self.slot_count()).filter_map(move |index| self.contribution(index))
    }

    pub fn date_label(&self) -> String {
        self.start.format("%B %d, %Y").to_string()
    }

    pub fn day_label(&self) -> String {
        self.start.format("%A, %B %d").to_string()
    }

    pub fn start_label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_label(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}
