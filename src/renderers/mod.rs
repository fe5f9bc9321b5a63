//! Renderers module for the conference documents
//!
//! This module contains the document emitters that turn sessions into
//! LaTeX source: the book of abstracts, the daily scientific program, room
//! plans and day sheets, plus the shared templating, sanitation and output
//! plumbing.

pub mod sanitize;
pub mod markup;
pub mod templates;
pub mod sink;
pub mod sections;
pub mod abstracts;
pub mod program;
pub mod session_sheet;
pub mod rooms;
pub mod days;

// Re-export commonly used types
pub use abstracts::BookOfAbstracts;
pub use days::DaySheets;
pub use markup::{AbstractMarkup, HtmlToLatex};
pub use program::DailyProgram;
pub use rooms::RoomPlans;
pub use sanitize::sanitize;
pub use sections::SectionWriter;
pub use session_sheet::{session_sheet, SheetStyle};
pub use sink::{DirectorySink, MemorySink, OutputSink};
pub use templates::{render_document, DocumentTemplate, TemplateContext};
