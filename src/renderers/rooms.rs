//! Per-room schedules
//!
//! One file per room listing its sessions in start order. A page break
//! opens every day.

use std::collections::BTreeMap;

use crate::config::GeneratorConfig;
use crate::errors::RenderError;
use crate::models::Session;
use crate::renderers::sanitize::sanitize;
use crate::renderers::session_sheet::{session_sheet, SheetStyle};
use crate::renderers::sink::OutputSink;
use crate::renderers::templates::{render_document, DocumentTemplate, TemplateContext};

const DAY_BREAK: &str = "\n\\pagebreak[4]";

pub struct RoomPlans<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RoomPlans<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Room bodies keyed by room name
    pub fn bodies(&self, sessions: &[Session]) -> BTreeMap<String, String> {
        let mut sorted: Vec<&Session> = sessions.iter().collect();
        sorted.sort_by(|a, b| a.room.cmp(&b.room).then_with(|| a.start.cmp(&b.start)));

        let mut bodies: BTreeMap<String, String> = BTreeMap::new();
        let mut last: Option<(&str, chrono::NaiveDate)> = None;
        for session in sorted {
            let body = bodies.entry(session.room.clone()).or_default();
            let day = session.start.date();
            // every day of a room, its first included, starts on a fresh page
            if last != Some((session.room.as_str(), day)) {
                body.push_str(DAY_BREAK);
            }
            body.push_str(&session_sheet(
                session,
                self.config.reveal_prize_lectures,
                SheetStyle::Listing,
            ));
            last = Some((session.room.as_str(), day));
        }
        bodies
    }

    pub fn emit(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<(), RenderError> {
        for (room, body) in self.bodies(sessions) {
            let context = TemplateContext::builder(sanitize(&body)).room(room.as_str()).build();
            let contents = render_document(DocumentTemplate::RoomPlan, &context)?;
            sink.write(&self.config.output.room_file(&file_stem(&room)), &contents)?;
        }
        log::info!("Room plans written");
        Ok(())
    }
}

/// Room names become file names; path separators are replaced
fn file_stem(room: &str) -> String {
    room.replace('/', "-")
}
