//! Book of abstracts sections
//!
//! A section collects the sessions of one block (`A04`, `MS3`, ...) into a
//! `\Section` macro followed by one `\Session` per session and one
//! `\Contribution` per talk. The macros take fixed, ordered arguments that
//! the `gamm-boa` document class typesets.

use crate::models::{Contribution, Session};
use crate::parse::OrganizerDirectory;
use crate::renderers::markup::AbstractMarkup;

/// Shown when no organizer is known for a section
const NO_ORGANIZERS: &str = "---";

/// Writes section bodies for the book of abstracts
pub struct SectionWriter<'a> {
    organizers: Option<&'a OrganizerDirectory>,
    markup: &'a dyn AbstractMarkup,
}

impl<'a> SectionWriter<'a> {
    pub fn new(organizers: Option<&'a OrganizerDirectory>, markup: &'a dyn AbstractMarkup) -> Self {
        Self { organizers, markup }
    }

    /// Section text for `block`, or `None` if it has no sessions.
    ///
    /// Silent sections use `\SSession`, which keeps sessions out of the
    /// table of contents.
    pub fn write_section(&self, block: &str, members: &[&Session], silent: bool) -> Option<String> {
        if members.is_empty() {
            return None;
        }

        let title = section_title(block, members);
        let organizers = self
            .organizers
            .and_then(|directory| directory.lookup(block))
            .map(|(_, lines)| lines)
            .unwrap_or_else(|| NO_ORGANIZERS.to_string());

        let mut out = format!("\\Section{{{}: {}}}%\n", block, title);
        out.push_str(&format!("        {{{}}}\n\n", organizers));

        for session in members {
            out.push_str(&session_macro(session, silent));
            for contribution in session.contributions() {
                out.push_str(&self.contribution_macro(&contribution));
            }
        }
        Some(out)
    }

    /// Abstract converted to LaTeX
    pub fn abstract_text(&self, contribution: &Contribution) -> String {
        if contribution.abstract_html.is_empty() {
            String::new()
        } else {
            self.markup.to_latex(&contribution.abstract_html)
        }
    }

    fn contribution_macro(&self, contribution: &Contribution) -> String {
        let mut out = format!("\\Contribution{{{}}}%\n", contribution.title);
        out.push_str(&format!("{{{}}}%\n", contribution.authors));
        out.push_str(&format!("{{{}}}%\n", contribution.start_label()));
        out.push_str(&format!("{{{}}}%\n", contribution.organisation_lines()));
        out.push_str(&format!("{{{}}}%\n", self.abstract_text(contribution)));
        out
    }
}

/// First session title of the block; differing titles are reported
pub fn section_title<'s>(block: &str, members: &[&'s Session]) -> &'s str {
    let mut titles: Vec<&str> = Vec::new();
    for session in members {
        if !titles.contains(&session.title.as_str()) {
            titles.push(&session.title);
        }
    }
    if titles.len() > 1 {
        log::warn!("Found varying titles for block {}: {:?}", block, titles);
    }
    members.first().copied().map(|s| s.title.as_str()).unwrap_or_default()
}

fn session_macro(session: &Session, silent: bool) -> String {
    let mut out = String::from(if silent { "\\SSession" } else { "\\Session" });
    out.push_str(&format!("{{{}}}%\n", session.id));
    out.push_str(&format!("{{{}}}%\n", session.title));
    out.push_str(&format!("{{{}}}%\n", session.date_label()));
    out.push_str(&format!("{{{}}}%\n", session.start_label()));
    out.push_str(&format!("{{{}}}%\n", session.end_label()));
    out.push_str(&format!("{{{}}}%\n", session.room));
    out.push_str(&format!("{{{}}}%\n", session.chair_lines()));
    out
}
