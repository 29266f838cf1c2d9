//! Line Classification
//!
//! Every input line is classified exactly once, before the parser decides
//! what to do with it. Classification is purely lexical: it looks at the
//! line prefix only and never at parser state.
use super::options::ParserOptions;

/// What a single input line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Only whitespace
    Blank,
    /// `Input: <sentence>`; carries the sentence, trimmed
    InputHeader(&'a str),
    /// `Parse:` or any other header noise
    ParseHeader,
    /// A line with no branch marker: only valid as the root line
    Content(&'a str),
    /// `<indent><marker><fields>`
    Branch(Branch<'a>),
}

/// A child line split at its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch<'a> {
    /// Column (in characters) where the marker starts
    pub column: usize,
    /// Everything after the marker
    pub fields: &'a str,
}

/// Determine the kind of a line
pub fn classify_line<'a>(line: &'a str, options: &ParserOptions) -> LineKind<'a> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix(options.input_header.as_str()) {
        return LineKind::InputHeader(rest.trim());
    }
    if options.is_header(line) {
        return LineKind::ParseHeader;
    }
    match split_branch(line, options) {
        Some(branch) => LineKind::Branch(branch),
        None => LineKind::Content(line),
    }
}

/// Split a line at its marker if the marker is preceded by indentation only.
///
/// Continuation glyphs count as indentation here and nowhere else, so a
/// word that happens to be `|` is left alone.
fn split_branch<'a>(line: &'a str, options: &ParserOptions) -> Option<Branch<'a>> {
    let continuation = options.continuation;
    let body = line.trim_start_matches(|c: char| c == ' ' || c == continuation);
    let fields = body.strip_prefix(options.marker.as_str())?;
    let indent = &line[..line.len() - body.len()];
    Some(Branch {
        column: indent.chars().count(),
        fields,
    })
}

/// Drop any diagnostic output that precedes the first `Input:` line.
///
/// Text with no such line is returned unchanged.
pub fn strip_preamble<'a>(text: &'a str, options: &ParserOptions) -> &'a str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(&options.input_header) {
            return &text[offset..];
        }
        offset += line.len();
    }
    text
}
