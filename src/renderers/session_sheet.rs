//! Single-session schedule tables
//!
//! Shared by room plans (listing style, several sessions per page) and day
//! sheets (standalone style, one session per page with a running header).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Category, Session};

/// Organisation footnote markers inside author lists
static AUTHOR_FOOTNOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\((\d+(?:,\d+)*)\)").expect("static regex"));

const PRIZE_PLACEHOLDER_ROW: &str =
    "\\textbf{Price winner(s) and title(s) will be announced in the Opening}\\\\ \\hline\n";

/// Presentation of one session table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetStyle {
    /// Section heading with day and time, title and presenter per talk
    Listing,
    /// Full page with running header, session title, chair and author lists
    Standalone,
}

/// Render one session as a two-column time/talk table
pub fn session_sheet(session: &Session, reveal_prize_lectures: bool, style: SheetStyle) -> String {
    let day = session.day_label();
    let start = session.start_label();
    let end = session.end_label();

    let mut out = String::from("\\small\n");
    match style {
        SheetStyle::Standalone => {
            out.push_str(&format!("\\fancyhead[L]{{\\Large\\bfseries {}}}", day));
            out.push_str(&format!("\\fancyhead[C]{{\\Large\\bfseries {}}}", session.room));
            out.push_str(&format!("\\fancyhead[R]{{\\Large\\bfseries {}--{}}}", start, end));
            out.push_str("\\begin{samepage}");
            out.push_str(&format!(
                "\\begin{{minipage}}{{0.22\\textwidth}}\\hfill \\huge\\bfseries\\detokenize{{{}:}}\\hspace*{{15pt}}\\end{{minipage}}",
                session.id
            ));
            out.push_str(&format!(
                "\\begin{{minipage}}{{0.78\\textwidth}}\\bfseries\\large\\detokenize{{{}}}\\end{{minipage}}",
                session.title
            ));
            out.push_str("\\vspace{10pt} \n\n");
            out.push_str("\\begin{minipage}{0.22\\textwidth}\\hfill \\large\\detokenize{Chair:}\\hspace*{15pt}\\end{minipage}");
            out.push_str(&format!(
                "\\begin{{minipage}}{{0.78\\textwidth}}\\bfseries\\large\\detokenize{{{}}}\\end{{minipage}}",
                session.first_chair().unwrap_or_default()
            ));
            out.push_str("\\vspace{20pt} \n\n");
        }
        SheetStyle::Listing => {
            out.push_str(&format!(
                "\n\\begin{{samepage}}\n\\section*{{{}\\hfill{}--{}}}\n",
                day, start, end
            ));
            out.push_str(&format!(
                "\n\\begin{{center}}\\huge\\bfseries\\detokenize{{{}}}\\end{{center}}\n",
                session.id
            ));
        }
    }
    out.push_str("\\begin{tabularx}{\\linewidth}{|A|B|}\n\\hline\n");

    if session.category() == Category::PrizeLecture && !reveal_prize_lectures {
        out.push_str(&format!("{}&\n", start));
        out.push_str(PRIZE_PLACEHOLDER_ROW);
    } else {
        let is_poster = session.category() == Category::Poster;
        for contribution in session.contributions() {
            let time = if is_poster {
                start.clone()
            } else {
                contribution.start_label()
            };
            out.push_str(&format!("{}&\n", time));
            match style {
                SheetStyle::Standalone => {
                    let authors = AUTHOR_FOOTNOTES.replace_all(&contribution.authors, "");
                    out.push_str(&format!("\\footnotesize\\textbf{{{}}}", contribution.title));
                    out.push_str(&format!("\\vspace{{2pt}} \\newline {{{}}}", authors));
                }
                SheetStyle::Listing => {
                    out.push_str(&format!(
                        "\\textbf{{{}}}\\newline\\textit{{{}}}",
                        contribution.title, contribution.presenter
                    ));
                }
            }
            out.push_str("\\\\ \\hline\n");
        }
    }

    out.push_str("\\end{tabularx}\n\\end{samepage}\n");
    out
}
