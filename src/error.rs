//! Error types for tree parsing and arc-diagram construction

use thiserror::Error;

/// The input text does not follow the ASCII parse-tree grammar.
///
/// Every variant except [`MalformedTreeError::NoRoot`] carries the offending
/// line verbatim together with its 1-based line number in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeError {
    /// No content line was found at all
    #[error("no root found")]
    NoRoot,
    /// A specific line could not be accepted
    #[error("line {line_number}: {defect}: {line:?}")]
    Line {
        line_number: usize,
        line: String,
        defect: LineDefect,
    },
}

impl MalformedTreeError {
    pub(crate) fn at(line_number: usize, line: &str, defect: LineDefect) -> Self {
        MalformedTreeError::Line {
            line_number,
            line: line.to_string(),
            defect,
        }
    }

    /// The 1-based number of the offending line, if the error is tied to one
    pub fn line_number(&self) -> Option<usize> {
        match self {
            MalformedTreeError::NoRoot => None,
            MalformedTreeError::Line { line_number, .. } => Some(*line_number),
        }
    }

    pub fn defect(&self) -> Option<&LineDefect> {
        match self {
            MalformedTreeError::NoRoot => None,
            MalformedTreeError::Line { defect, .. } => Some(defect),
        }
    }
}

/// Why a single line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineDefect {
    #[error("expected 4 tokens (word, tag, role, @order), found {found}")]
    TokenCount { found: usize },
    #[error("order token {token:?} does not start with '@'")]
    MissingOrderSigil { token: String },
    #[error("order token {token:?} is not a number")]
    NonNumericOrder { token: String },
    #[error("order is 1-based, @0 is not allowed")]
    ZeroOrder,
    #[error("orphan node at depth {depth}")]
    OrphanNode { depth: usize },
    #[error("depth jumps from {previous} to {depth}")]
    DepthJump { depth: usize, previous: usize },
    #[error("branch marker starts inside the left margin")]
    MarkerInMargin,
    #[error("expected a branch marker after the root line")]
    MissingMarker,
    #[error("order @{order} is used more than once")]
    DuplicateOrder { order: usize },
    #[error("order @{order} is outside 1..={count}")]
    OrderOutOfRange { order: usize, count: usize },
}

/// A tree broke the sentence-order contiguity postcondition.
///
/// Only reachable through hand-built trees or a parser configured not to
/// check orders, since [`crate::parsing::TreeParser`] rejects such input by default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("sentence order is not contiguous: position {position} holds order {found}")]
    NonContiguousOrder { position: usize, found: usize },
}

/// Errors surfaced by [`crate::convert`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Malformed(#[from] MalformedTreeError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Format source context around an offending line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// `line_number` is 1-based, as carried by [`MalformedTreeError`].
pub fn format_source_context(source: &str, line_number: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line_number.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (offset, text) in lines[start_line.min(end_line)..end_line].iter().enumerate() {
        let line_num = start_line + offset;
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, text));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";

        let context = format_source_context(source, 4);

        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 1"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_format_source_context_past_end() {
        assert_eq!(format_source_context("only line", 9), "");
    }

    #[test]
    fn test_line_error_display() {
        let err = MalformedTreeError::at(3, " +-- I PRP", LineDefect::TokenCount { found: 2 });
        assert_eq!(
            err.to_string(),
            "line 3: expected 4 tokens (word, tag, role, @order), found 2: \" +-- I PRP\""
        );
        assert_eq!(err.line_number(), Some(3));
    }

    #[test]
    fn test_no_root_display() {
        assert_eq!(MalformedTreeError::NoRoot.to_string(), "no root found");
        assert_eq!(MalformedTreeError::NoRoot.line_number(), None);
    }
}
