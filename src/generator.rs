//! Document generation driver
//!
//! Runs the selected emitters over one set of sessions. All documents are
//! built from the same immutable configuration, so the outputs of one run
//! agree with each other.

use crate::config::GeneratorConfig;
use crate::errors::RenderError;
use crate::models::Session;
use crate::parse::OrganizerDirectory;
use crate::renderers::{
    AbstractMarkup, BookOfAbstracts, DailyProgram, DaySheets, HtmlToLatex, OutputSink, RoomPlans,
};

/// Which documents to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSelection {
    pub book_of_abstracts: bool,
    pub daily_program: bool,
    pub room_plans: bool,
    pub day_sheets: bool,
}

impl DocumentSelection {
    pub fn all() -> Self {
        Self {
            book_of_abstracts: true,
            daily_program: true,
            room_plans: true,
            day_sheets: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.book_of_abstracts || self.daily_program || self.room_plans || self.day_sheets)
    }
}

impl Default for DocumentSelection {
    fn default() -> Self {
        Self::all()
    }
}

pub struct Generator {
    config: GeneratorConfig,
    organizers: Option<OrganizerDirectory>,
    markup: Box<dyn AbstractMarkup>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            organizers: None,
            markup: Box::new(HtmlToLatex),
        }
    }

    pub fn with_organizers(mut self, organizers: OrganizerDirectory) -> Self {
        self.organizers = Some(organizers);
        self
    }

    pub fn with_markup(mut self, markup: Box<dyn AbstractMarkup>) -> Self {
        self.markup = markup;
        self
    }

    /// Emit the selected documents into `sink`.
    ///
    /// The daily program runs first, so an unrecognized talk length aborts
    /// the run before any file is written.
    pub fn run(
        &self,
        sessions: &[Session],
        selection: DocumentSelection,
        sink: &mut dyn OutputSink,
    ) -> Result<(), RenderError> {
        log::info!(
            "Generating documents for {} sessions (prize lectures {})",
            sessions.len(),
            if self.config.reveal_prize_lectures { "revealed" } else { "masked" }
        );

        if selection.daily_program {
            DailyProgram::new(&self.config).emit(sessions, sink)?;
        }
        if selection.book_of_abstracts {
            BookOfAbstracts::new(&self.config, self.organizers.as_ref(), self.markup.as_ref())
                .emit(sessions, sink)?;
        }
        if selection.room_plans {
            RoomPlans::new(&self.config).emit(sessions, sink)?;
        }
        if selection.day_sheets {
            DaySheets::new(&self.config).emit(sessions, sink)?;
        }
        Ok(())
    }
}
