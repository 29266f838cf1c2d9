//! Treeviz formatter
//!
//! Draws the tree back in the parser's own ASCII layout, one node per line:
//!
//!     Input: Bob brought the pizza to Alice .
//!     Parse:
//!     brought VBD ROOT @2
//!      +-- Bob NNP nsubj @1
//!      +-- pizza NN dobj @4
//!      |   +-- the DT det @3
//!      +-- . . punct @7
//!
//! A continuation glyph is drawn for every ancestor that still has siblings
//! below it, so the output parses back into the same tree. The headers are
//! only written when the tree knows its sentence.
//!
//! With `annotate` set, each line also carries `-- depth=D -- index=I`
//! (I being the zero-based order). Annotated output is for reading only.

use super::registry::{flag, FormatError, FormatParams, Formatter};
use crate::parsing::ParserOptions;
use crate::tree::{Node, Tree};

pub fn to_treeviz_str(tree: &Tree) -> String {
    to_treeviz_str_with_params(tree, &FormatParams::new())
}

pub fn to_treeviz_str_with_params(tree: &Tree, params: &FormatParams) -> String {
    TreevizFormatter::default().render(tree, flag(params, "annotate", false))
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    layout: ParserOptions,
}

impl TreevizFormatter {
    /// Draw with the markers and widths of a non-default layout
    pub fn with_layout(layout: ParserOptions) -> Self {
        Self { layout }
    }

    fn render(&self, tree: &Tree, annotate: bool) -> String {
        let mut output = String::new();
        if let Some(sentence) = tree.sentence() {
            output.push_str(&format!("{} {}\n", self.layout.input_header, sentence));
            output.push_str(&format!("{}\n", self.layout.parse_header));
        }
        output.push_str(&node_label(tree.root(), annotate));
        output.push('\n');
        self.render_children(tree, tree.root(), "", annotate, &mut output);
        output
    }

    fn render_children(
        &self,
        tree: &Tree,
        node: &Node,
        prefix: &str,
        annotate: bool,
        output: &mut String,
    ) {
        let margin = " ".repeat(self.layout.margin);
        let gap = " ".repeat(self.layout.indent_width.saturating_sub(1));
        let child_count = node.children().len();

        for (i, &child_id) in node.children().iter().enumerate() {
            let child = tree.node(child_id);
            let is_last = i == child_count - 1;
            output.push_str(&format!(
                "{}{}{} {}\n",
                margin,
                prefix,
                self.layout.marker,
                node_label(child, annotate)
            ));

            let child_prefix = if is_last {
                format!("{} {}", prefix, gap)
            } else {
                format!("{}{}{}", prefix, self.layout.continuation, gap)
            };
            self.render_children(tree, child, &child_prefix, annotate, output);
        }
    }
}

fn node_label(node: &Node, annotate: bool) -> String {
    let label = format!("{} {} {} @{}", node.word, node.tag, node.role, node.order + 1);
    if annotate {
        format!("{} -- depth={} -- index={}", label, node.depth, node.order)
    } else {
        label
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize_with_params(
        &self,
        tree: &Tree,
        params: &FormatParams,
    ) -> Result<String, FormatError> {
        Ok(self.render(tree, flag(params, "annotate", false)))
    }

    fn description(&self) -> &str {
        "The tree redrawn in the parser's ASCII layout"
    }
}
