//! # deptree
//!
//! Turns the ASCII dependency trees printed by an external natural-language
//! parser into an ordered [`tree::Tree`], and flattens that tree into an
//! [`arcs::ArcDiagram`] for arc-diagram renderers.
//!
//!     text --parse_tree--> Tree --to_arc_diagram--> ArcDiagram { words, arcs }
//!
//! Both steps are pure: no I/O, no shared state, safe to call from any
//! number of threads on independent inputs. Running the external parser
//! and serving the result over HTTP are left to the caller.
//!
//! Layout:
//!     - [`parsing`]: the line grammar and the tree scanner
//!     - [`tree`]: the arena-backed tree shared by every stage
//!     - [`arcs`]: flattening into words and arcs
//!     - [`formats`]: named output formats
//!     - [`config`]: layered configuration for the `deptree` binary

pub mod arcs;
pub mod config;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod tree;

pub use arcs::{to_arc_diagram, ArcDiagram};
pub use error::{Error, InvariantViolation, MalformedTreeError};
pub use parsing::{parse_tree, TreeParser};
pub use tree::Tree;

/// Parse a tree and flatten it in one go
pub fn convert(text: &str) -> Result<ArcDiagram, Error> {
    let tree = parse_tree(text)?;
    Ok(to_arc_diagram(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        let diagram = convert("Go VB ROOT @1\n +-- ! . punct @2\n").unwrap();
        assert_eq!(diagram.words.len(), 2);
        assert_eq!(diagram.arcs.len(), 1);
    }

    #[test]
    fn test_convert_surfaces_parse_errors() {
        assert_eq!(
            convert("\n\n"),
            Err(Error::Malformed(MalformedTreeError::NoRoot))
        );
    }
}
