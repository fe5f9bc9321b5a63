//! Document template rendering
//!
//! Each output document is a Mustache template with a single body
//! substitution point, `contents`. Room plans additionally receive the room
//! name and day sheets the paper option for the geometry package.
//!
//! Templates use triple mustaches (`{{{contents}}}`) so LaTeX is inserted
//! verbatim, without HTML escaping. They must not contain `{{` anywhere
//! else, which rules out doubled braces in the LaTeX preamble.

use serde::Serialize;

use crate::errors::RenderError;

/// Template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentTemplate {
    /// Book of abstracts main file (`gamm-boa` class)
    BookOfAbstracts,
    /// Daily scientific program (`gamm-dsp` class)
    DailyProgram,
    /// Per-room schedule
    RoomPlan,
    /// Per-day standalone session sheets
    DaySheet,
}

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Document body
    pub contents: String,

    /// Room name (room plans only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// Paper option, e.g. `a4paper,landscape` (day sheets only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
}

impl TemplateContext {
    /// Create a new template context with just a body
    pub fn new(contents: String) -> Self {
        Self {
            contents,
            room: None,
            paper: None,
        }
    }

    /// Builder pattern for fluent API
    pub fn builder(contents: String) -> TemplateContextBuilder {
        TemplateContextBuilder::new(contents)
    }
}

/// Builder for TemplateContext
pub struct TemplateContextBuilder {
    context: TemplateContext,
}

impl TemplateContextBuilder {
    pub fn new(contents: String) -> Self {
        Self {
            context: TemplateContext::new(contents),
        }
    }

    pub fn room<S: Into<String>>(mut self, room: S) -> Self {
        self.context.room = Some(room.into());
        self
    }

    pub fn paper<S: Into<String>>(mut self, paper: S) -> Self {
        self.context.paper = Some(paper.into());
        self
    }

    pub fn build(self) -> TemplateContext {
        self.context
    }
}

/// Get template content by type
pub fn get_template_content(template_type: DocumentTemplate) -> &'static str {
    match template_type {
        DocumentTemplate::BookOfAbstracts => include_str!("templates/book_of_abstracts.tex.mustache"),
        DocumentTemplate::DailyProgram => include_str!("templates/daily_program.tex.mustache"),
        DocumentTemplate::RoomPlan => include_str!("templates/room_plan.tex.mustache"),
        DocumentTemplate::DaySheet => include_str!("templates/day_sheet.tex.mustache"),
    }
}

/// Render a document using a template
pub fn render_document(
    template_type: DocumentTemplate,
    context: &TemplateContext,
) -> Result<String, RenderError> {
    let template = mustache::compile_str(get_template_content(template_type))?;
    Ok(template.render_to_string(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let context = TemplateContext::builder("body".to_string())
            .room("HS 1")
            .paper("a3paper,portrait")
            .build();
        assert_eq!(context.contents, "body");
        assert_eq!(context.room.as_deref(), Some("HS 1"));
        assert_eq!(context.paper.as_deref(), Some("a3paper,portrait"));
    }

    #[test]
    fn test_body_inserted_verbatim() {
        let body = "\\chapter{Monday}\n\\begin{longtable}{P|}\n& <b> \\\\\n".to_string();
        let rendered = render_document(DocumentTemplate::DailyProgram, &TemplateContext::new(body.clone()))
            .expect("template renders");
        assert!(rendered.contains(&body));
        assert!(rendered.contains("\\documentclass[colorlinks]{gamm-dsp}"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_room_and_paper_substitution() {
        let room = render_document(
            DocumentTemplate::RoomPlan,
            &TemplateContext::builder("x".to_string()).room("HS 1-2").build(),
        )
        .expect("template renders");
        assert!(room.contains("\\bfseries HS 1-2"));

        let day = render_document(
            DocumentTemplate::DaySheet,
            &TemplateContext::builder("x".to_string()).paper("a3paper,portrait").build(),
        )
        .expect("template renders");
        assert!(day.contains("\\usepackage[a3paper,portrait,margin=2cm"));
    }

    #[test]
    fn test_all_templates_compile() {
        for template in [
            DocumentTemplate::BookOfAbstracts,
            DocumentTemplate::DailyProgram,
            DocumentTemplate::RoomPlan,
            DocumentTemplate::DaySheet,
        ] {
            assert!(mustache::compile_str(get_template_content(template)).is_ok());
        }
    }
}
