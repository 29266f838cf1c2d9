//! Grammar knobs for the ASCII tree layout

use serde::Deserialize;

/// Layout constants of the ASCII parse-tree grammar.
///
/// The defaults describe the layout emitted by the upstream dependency
/// parser and match `defaults/deptree.default.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserOptions {
    /// Columns per tree level
    pub indent_width: usize,
    /// Fixed columns before the first level
    pub margin: usize,
    /// Token that opens every child line
    pub marker: String,
    /// Glyph that draws an open ancestor branch, alignment only
    pub continuation: char,
    /// Header carrying the raw sentence
    pub input_header: String,
    pub parse_header: String,
    /// Reject child lines more than one level below the previous line
    pub strict_depth: bool,
    /// Reject trees whose orders are not exactly `1..=N`
    pub require_contiguous_order: bool,
}

impl ParserOptions {
    /// Options with both structural checks off: depth jumps resolve to
    /// whatever node last sat one level up, and orders may be arbitrary.
    pub fn lenient() -> Self {
        Self {
            strict_depth: false,
            require_contiguous_order: false,
            ..Self::default()
        }
    }

    pub(crate) fn is_header(&self, line: &str) -> bool {
        line.starts_with(&self.input_header) || line.starts_with(&self.parse_header)
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            margin: 1,
            marker: "+--".to_string(),
            continuation: '|',
            input_header: "Input:".to_string(),
            parse_header: "Parse:".to_string(),
            strict_depth: true,
            require_contiguous_order: true,
        }
    }
}
