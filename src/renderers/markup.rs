//! Abstract markup conversion
//!
//! Abstracts arrive as HTML fragments from the registration tool's editor.
//! Full conversion is the job of an external tool; [`HtmlToLatex`] covers
//! the inline formatting that actually occurs in abstracts and strips the
//! rest. Swap in another [`AbstractMarkup`] for anything richer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Converts abstract markup to LaTeX
pub trait AbstractMarkup {
    fn to_latex(&self, html: &str) -> String;
}

/// Leaves the text untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;

impl AbstractMarkup for PassThrough {
    fn to_latex(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Minimal HTML to LaTeX conversion for inline formatting
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlToLatex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static regex"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</p>\s*<p(\s[^>]*)?>").expect("static regex"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static regex"));
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("static regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("static regex"));

/// Inline tags with their LaTeX commands
static INLINE_TAGS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("b", "textbf"),
        ("strong", "textbf"),
        ("i", "emph"),
        ("em", "emph"),
        ("u", "underline"),
        ("sub", "textsubscript"),
        ("sup", "textsuperscript"),
    ]
    .iter()
    .map(|(tag, command)| {
        let pattern = format!(r"(?is)<{tag}(\s[^>]*)?>(.*?)</{tag}>", tag = tag);
        (Regex::new(&pattern).expect("static regex"), *command)
    })
    .collect()
});

/// Named entities, decoded after numeric ones; `&amp;` last
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", "~"),
    ("&lt;", "$<$"),
    ("&gt;", "$>$"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&amp;", "\\&"),
];

impl AbstractMarkup for HtmlToLatex {
    fn to_latex(&self, html: &str) -> String {
        let mut text = html.replace("\r\n", "\n");
        text = LINE_BREAK.replace_all(&text, "\\newline ").into_owned();
        text = PARAGRAPH_BREAK.replace_all(&text, "\n\n").into_owned();
        for (pattern, command) in INLINE_TAGS.iter() {
            let replacement = format!("\\{}{{${{2}}}}", command);
            text = pattern.replace_all(&text, replacement.as_str()).into_owned();
        }
        text = ANY_TAG.replace_all(&text, "").into_owned();

        text = NUMERIC_ENTITY
            .replace_all(&text, |caps: &regex::Captures| decode_numeric(&caps[1]))
            .into_owned();
        text = escape_unescaped(&text, '%');
        text = escape_unescaped(&text, '#');
        text = escape_underscores(&text);
        for (entity, latex) in NAMED_ENTITIES {
            text = text.replace(entity, latex);
        }

        BLANK_LINES.replace_all(text.trim(), "\n\n").into_owned()
    }
}

fn decode_numeric(code: &str) -> String {
    let value = match code.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => code.parse::<u32>().ok(),
    };
    value
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}

/// Prefix `ch` with a backslash unless it already has one
fn escape_unescaped(text: &str, ch: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if c == ch && previous != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

/// Escape `_` outside `$..$` math
fn escape_underscores(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_math = false;
    let mut previous = None;
    for c in text.chars() {
        match c {
            '$' if previous != Some('\\') => in_math = !in_math,
            '_' if !in_math && previous != Some('\\') => out.push('\\'),
            _ => {}
        }
        out.push(c);
        previous = Some(c);
    }
    out
}
