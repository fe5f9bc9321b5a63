//! Cohorts: sessions sharing a start time
//!
//! One cohort becomes one table in the daily program. The column count is
//! decided by a single rule:
//!
//! 1. any poster session in the cohort → poster table;
//! 2. a lone prize-lecture session → 2 columns;
//! 3. any other lone session → 1 column;
//! 4. otherwise the first session's length divided by the default slot.

use chrono::NaiveDateTime;

use super::slot_case::SlotLengths;
use crate::models::{Category, Session};

/// Sessions starting at the same instant, sorted by identifier
#[derive(Clone, Debug)]
pub struct Cohort<'a> {
    pub start: NaiveDateTime,
    pub sessions: Vec<&'a Session>,
}

/// Table layout chosen for a cohort
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CohortLayout {
    Posters,
    Slots(usize),
}

impl<'a> Cohort<'a> {
    pub fn layout(&self, lengths: &SlotLengths) -> CohortLayout {
        if self
            .sessions
            .iter()
            .any(|s| s.category() == Category::Poster)
        {
            return CohortLayout::Posters;
        }
        match self.sessions.as_slice() {
            [only] if only.category() == Category::PrizeLecture => CohortLayout::Slots(2),
            [_] => CohortLayout::Slots(1),
            [first, ..] => {
                let columns = first.duration_minutes() / lengths.default;
                CohortLayout::Slots(columns.max(1) as usize)
            }
            [] => CohortLayout::Slots(1),
        }
    }

    pub fn day_label(&self) -> String {
        self.start.format("%A, %B %d").to_string()
    }
}

/// Group sessions into cohorts ordered by start time, then identifier
pub fn cohorts(sessions: &[Session]) -> Vec<Cohort<'_>> {
    let mut sorted: Vec<&Session> = sessions.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let mut groups: Vec<Cohort> = Vec::new();
    for session in sorted {
        match groups.last_mut() {
            Some(cohort) if cohort.start == session.start => cohort.sessions.push(session),
            _ => groups.push(Cohort {
                start: session.start,
                sessions: vec![session],
            }),
        }
    }
    groups
}
