//! Per-day session sheets
//!
//! One file per conference day with one standalone sheet per session,
//! ordered by start time and room.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::GeneratorConfig;
use crate::errors::RenderError;
use crate::models::Session;
use crate::renderers::sanitize::sanitize;
use crate::renderers::session_sheet::{session_sheet, SheetStyle};
use crate::renderers::sink::OutputSink;
use crate::renderers::templates::{render_document, DocumentTemplate, TemplateContext};

const SHEET_BREAK: &str = "\n\\pagebreak[4]";

pub struct DaySheets<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DaySheets<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Day bodies keyed by date, labelled `Weekday, Month DD`
    pub fn bodies(&self, sessions: &[Session]) -> BTreeMap<NaiveDate, (String, String)> {
        let mut sorted: Vec<&Session> = sessions.iter().collect();
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.room.cmp(&b.room)));

        let mut days: BTreeMap<NaiveDate, (String, Vec<String>)> = BTreeMap::new();
        for session in sorted {
            let (_, sheets) = days
                .entry(session.start.date())
                .or_insert_with(|| (session.day_label(), Vec::new()));
            sheets.push(session_sheet(
                session,
                self.config.reveal_prize_lectures,
                SheetStyle::Standalone,
            ));
        }

        days.into_iter()
            .map(|(date, (label, sheets))| (date, (label, sheets.join(SHEET_BREAK))))
            .collect()
    }

    pub fn emit(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<(), RenderError> {
        for (_, (day, body)) in self.bodies(sessions) {
            let context = TemplateContext::builder(sanitize(&body))
                .paper(self.config.paper_for_day(&day))
                .build();
            let contents = render_document(DocumentTemplate::DaySheet, &context)?;
            sink.write(&self.config.output.day_file(&day), &contents)?;
            log::debug!("Day sheets for {} written", day);
        }
        log::info!("Day sheets written");
        Ok(())
    }
}
