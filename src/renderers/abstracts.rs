//! Book of abstracts emitter
//!
//! Chapters, in order: Prandtl Memorial and plenary lectures, prize
//! lectures (only once revealed), minisymposia and young researchers
//! minisymposia, DFG programs, contributed sessions. Every section goes to
//! its own file under the sessions directory; the main file only holds the
//! chapter headings and `\input` lines.

use std::collections::BTreeSet;

use crate::config::GeneratorConfig;
use crate::errors::RenderError;
use crate::models::{Category, Session};
use crate::parse::OrganizerDirectory;
use crate::renderers::markup::AbstractMarkup;
use crate::renderers::sanitize::sanitize;
use crate::renderers::sections::SectionWriter;
use crate::renderers::sink::OutputSink;
use crate::renderers::templates::{render_document, DocumentTemplate, TemplateContext};

const PRIZE_LECTURE_NAME: &str = "Richard von Mises Lecture";
const CHAIR_UNKNOWN: &str = "\\color{red} NOT AVAILABLE";

/// Book of abstracts generator
pub struct BookOfAbstracts<'a> {
    config: &'a GeneratorConfig,
    sections: SectionWriter<'a>,
}

impl<'a> BookOfAbstracts<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        organizers: Option<&'a OrganizerDirectory>,
        markup: &'a dyn AbstractMarkup,
    ) -> Self {
        Self {
            config,
            sections: SectionWriter::new(organizers, markup),
        }
    }

    /// Write all section files and the main document
    pub fn emit(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<(), RenderError> {
        let mut inputs = String::from("\\chapter{Prandtl Memorial Lecture and Plenary~Lectures}\n");
        inputs.push_str(&self.lectures(sessions, Category::Prandtl, sink)?);
        inputs.push_str(&self.lectures(sessions, Category::Plenary, sink)?);

        if self.config.reveal_prize_lectures {
            inputs.push_str("\\chapter{Richard von Mises Price Lecture(s)}\n");
            inputs.push_str(&self.prize_lectures(sessions, sink)?);
        }

        inputs.push_str("\\chapter{Minisymposia and Young~Researchers~Minisymposia}\n");
        inputs.push_str(&self.block_sections(sessions, Category::Minisymposium, true, sink)?);
        inputs.push_str(&self.block_sections(sessions, Category::YoungResearcher, true, sink)?);

        inputs.push_str("\\chapter{DFG Programs}\n");
        inputs.push_str(&self.dfg_sections(sessions, sink)?);

        inputs.push_str("\\chapter{Contributed Sessions}\n");
        inputs.push_str(&self.block_sections(sessions, Category::Contributed, false, sink)?);

        let contents = render_document(DocumentTemplate::BookOfAbstracts, &TemplateContext::new(inputs))?;
        let path = self.config.output.book_file();
        sink.write(&path, &contents)?;
        log::info!("Book of abstracts written to {}", path.display());
        Ok(())
    }

    /// Prandtl lectures share one file; every plenary gets its own
    fn lectures(
        &self,
        sessions: &[Session],
        category: Category,
        sink: &mut dyn OutputSink,
    ) -> Result<String, RenderError> {
        let members = of_category(sessions, category);
        if members.is_empty() {
            return Ok(String::new());
        }

        let (macro_name, shared_file) = match category {
            Category::Prandtl => ("Prandtl", Some("PML")),
            _ => ("Plenary", None),
        };

        let mut inputs = String::new();
        let mut shared = String::new();
        for session in members {
            let Some(text) = self.lecture_macro(macro_name, session) else {
                log::warn!("Lecture {} has no speaker, skipped", session.id);
                continue;
            };
            match shared_file {
                Some(_) => shared.push_str(&text),
                None => inputs.push_str(&self.write_file(&session.id, &text, sink)?),
            }
        }
        if let Some(name) = shared_file {
            if !shared.is_empty() {
                inputs.push_str(&self.write_file(name, &shared, sink)?);
            }
        }
        Ok(inputs)
    }

    /// Nine-argument lecture macro built from the session's first slot
    fn lecture_macro(&self, macro_name: &str, session: &Session) -> Option<String> {
        let lecture = session.contribution(1)?;
        let speaker = if lecture.organisations.is_empty() {
            format!("\\presenter{{{}}}", lecture.presenter)
        } else {
            format!(
                "\\presenter{{{}}} {{\\em ({})}}",
                lecture.presenter, lecture.organisations
            )
        };
        let chair = session.first_chair().unwrap_or(CHAIR_UNKNOWN);

        let mut out = format!("\\{}{{{}}}%\n", macro_name, lecture.title);
        for argument in [
            session.id.clone(),
            speaker,
            session.date_label(),
            session.start_label(),
            session.end_label(),
            session.room.clone(),
            chair.to_string(),
            self.sections.abstract_text(&lecture),
        ] {
            out.push_str(&format!("        {{{}}}%\n", argument));
        }
        Some(out)
    }

    fn prize_lectures(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<String, RenderError> {
        let mut text = String::new();
        for session in of_category(sessions, Category::PrizeLecture) {
            let date = session.date_label();
            for lecture in session.contributions() {
                text.push_str(&format!("\\Mises{{{}}}%\n", lecture.title));
                text.push_str(&format!("       {{{}}}%\n", PRIZE_LECTURE_NAME));
                text.push_str(&format!(
                    "       {{\\presenter{{{}}}~{{\\em({})}}}}%\n",
                    lecture.presenter, lecture.organisations
                ));
                text.push_str(&format!("       {{{}}}%\n", date));
                text.push_str(&format!("       {{{}}}%\n", lecture.start_label()));
                text.push_str(&format!("       {{{}}}%\n", lecture.end_label()));
                text.push_str(&format!("       {{{}}}{{}}%\n", session.room));
            }
        }
        if text.is_empty() {
            return Ok(String::new());
        }
        self.write_file("RvML", &text, sink)
    }

    /// One section per block, blocks in identifier order
    fn block_sections(
        &self,
        sessions: &[Session],
        category: Category,
        silent: bool,
        sink: &mut dyn OutputSink,
    ) -> Result<String, RenderError> {
        let members = of_category(sessions, category);
        let blocks: BTreeSet<&str> = members.iter().map(|s| s.block()).collect();

        let mut inputs = String::new();
        for block in blocks {
            let in_block: Vec<&Session> = members.iter().copied().filter(|s| s.block() == block).collect();
            if let Some(text) = self.sections.write_section(block, &in_block, silent) {
                inputs.push_str(&self.write_file(&block.replace(' ', "_"), &text, sink)?);
            }
        }
        Ok(inputs)
    }

    /// DFG programs get one section per session
    fn dfg_sections(&self, sessions: &[Session], sink: &mut dyn OutputSink) -> Result<String, RenderError> {
        let mut inputs = String::new();
        for session in of_category(sessions, Category::Dfg) {
            if let Some(text) = self.sections.write_section(&session.id, &[session], true) {
                inputs.push_str(&self.write_file(&session.id.replace(' ', "_"), &text, sink)?);
            }
        }
        Ok(inputs)
    }

    /// Sanitize and write one section file, returning its `\input` line
    fn write_file(&self, name: &str, text: &str, sink: &mut dyn OutputSink) -> Result<String, RenderError> {
        let path = self.config.output.book_section_file(name);
        sink.write(&path, &sanitize(text))?;
        Ok(format!("\\input{{{}}}\n", self.config.output.book_section_input(name)))
    }
}

/// Sessions of one category sorted by identifier
fn of_category(sessions: &[Session], category: Category) -> Vec<&Session> {
    let mut members: Vec<&Session> = sessions.iter().filter(|s| s.category() == category).collect();
    members.sort_by(|a, b| a.id.cmp(&b.id));
    members
}
