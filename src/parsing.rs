//! ASCII dependency-tree parsing
//!
//! The input is the text dump of an external dependency parser:
//!
//!     Input: Bob brought the pizza to Alice .
//!     Parse:
//!     brought VBD ROOT @2
//!      +-- Bob NNP nsubj @1
//!      +-- pizza NN dobj @4
//!      |   +-- the DT det @3
//!      +-- to IN prep @5
//!      |   +-- Alice NNP pobj @6
//!      +-- . . punct @7
//!
//! Headers and blank lines are noise. The first content line is the root,
//! every later one is a child line whose depth follows from the column of
//! its `+--` marker (see [`indentation`]). `|` glyphs only keep open
//! branches aligned. `@N` is the 1-based sentence position.
//!
//! Words that contain spaces cannot be expressed in this grammar.
//!
//! Modules:
//!     - [`line_classification`]: what kind each line is
//!     - [`indentation`]: marker column to depth
//!     - [`tokens`]: the four fields of a node line
//!     - [`parser`]: the scanner that assembles the [`Tree`]

pub mod indentation;
pub mod line_classification;
pub mod options;
pub mod parser;
pub mod tokens;

pub use line_classification::strip_preamble;
pub use options::ParserOptions;
pub use parser::TreeParser;

use crate::error::MalformedTreeError;
use crate::tree::Tree;

/// Parse text in the default layout
pub fn parse_tree(text: &str) -> Result<Tree, MalformedTreeError> {
    TreeParser::default().parse(text)
}
