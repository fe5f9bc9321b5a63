//! Daily scientific program
//!
//! One table per cohort, in start order, with a chapter heading whenever the
//! day changes.

use crate::config::GeneratorConfig;
use crate::errors::RenderError;
use crate::layout::{cohorts, SlotTablePacker};
use crate::models::Session;
use crate::renderers::sanitize::sanitize;
use crate::renderers::sink::OutputSink;
use crate::renderers::templates::{render_document, DocumentTemplate, TemplateContext};

pub struct DailyProgram<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DailyProgram<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Program body without the document wrapper
    pub fn body(&self, sessions: &[Session]) -> Result<String, RenderError> {
        let packer = SlotTablePacker::new(&self.config.layout, self.config.reveal_prize_lectures);

        let mut out = String::new();
        let mut current_day: Option<String> = None;
        for cohort in cohorts(sessions) {
            let day = cohort.day_label();
            if current_day.as_deref() != Some(day.as_str()) {
                out.push_str(&format!("\\chapter{{{}}}\n", day));
                current_day = Some(day);
            }
            out.push_str(&packer.render_cohort(&cohort)?);
        }
        Ok(sanitize(&out))
    }

    pub fn emit(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<(), RenderError> {
        let body = self.body(sessions)?;
        let contents = render_document(DocumentTemplate::DailyProgram, &TemplateContext::new(body))?;
        let path = self.config.output.program_file();
        sink.write(&path, &contents)?;
        log::info!("Daily scientific program written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LayoutError;
    use crate::models::session::testing::{at, session, talk, with_talks};
    use crate::renderers::sink::MemorySink;
    use chrono::Duration;

    #[test]
    fn test_chapter_per_day() {
        let monday = session("A01_01", at(9, 0), at(9, 30));
        let mut tuesday = session("A01_02", at(9, 0), at(9, 30));
        tuesday.start += Duration::days(1);
        tuesday.end += Duration::days(1);
        let later = session("A02_01", at(11, 0), at(11, 30));

        let body = DailyProgram::new(&GeneratorConfig::default())
            .body(&[tuesday, later, monday])
            .expect("program renders");

        assert_eq!(body.matches("\\chapter{").count(), 2);
        assert!(body.starts_with("\\chapter{Monday, September 16}\n\\begin{longtable}"));
        assert_eq!(body.matches("\\begin{longtable}").count(), 3);
        let tuesday_at = body.find("\\chapter{Tuesday, September 17}").expect("second day");
        assert!(body[tuesday_at..].contains("A01_02"));
        assert!(!body[tuesday_at..].contains("A02_01"));
    }

    #[test]
    fn test_unrecognized_duration_aborts() {
        let broken = with_talks(
            session("A01_01", at(9, 0), at(9, 30)),
            vec![talk("Odd", "Doe, Jane", at(9, 0), at(9, 17))],
        );
        let mut sink = MemorySink::new();
        let result = DailyProgram::new(&GeneratorConfig::default()).emit(&[broken], &mut sink);
        assert!(matches!(
            result,
            Err(RenderError::Layout(LayoutError::UnrecognizedDuration { minutes: 17, .. }))
        ));
        assert!(sink.files.is_empty());
    }

    #[test]
    fn test_written_to_program_file() {
        let mut sink = MemorySink::new();
        DailyProgram::new(&GeneratorConfig::default())
            .emit(&[session("A01_01", at(9, 0), at(9, 30))], &mut sink)
            .expect("program renders");
        let text = sink
            .get("Daily_Scientific_Program/Daily_Scientific_Program.tex")
            .expect("program file");
        assert!(text.contains("\\chapter{Monday, September 16}"));
    }
}
