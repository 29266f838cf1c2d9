//! Single-pass line scanner
//!
//! The scanner moves through three states: awaiting the root line, then the
//! body, where every remaining content line must be a child line. Lines are
//! classified once and never revisited.
//!
//! Parent resolution keeps, per depth, the most recently attached node; a
//! child at depth `d` hangs under the entry for `d - 1`. This is only sound
//! because the upstream parser emits a pre-order, depth-first, left-to-right
//! traversal, so a node's parent is still the latest entry one level up when
//! the child is read. The scanner relies on that order; with `strict_depth`
//! it additionally rejects lines that descend more than one level at once,
//! which is the one way a stale entry could be picked up.

use super::indentation::depth_for_column;
use super::line_classification::{classify_line, Branch, LineKind};
use super::options::ParserOptions;
use super::tokens::parse_fields;
use crate::error::{LineDefect, MalformedTreeError};
use crate::tree::{NodeData, NodeId, Tree, TreeBuilder};

/// Parses ASCII dependency trees with a fixed set of [`ParserOptions`]
#[derive(Debug, Clone, Default)]
pub struct TreeParser {
    options: ParserOptions,
}

impl TreeParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the whole text into a [`Tree`]
    pub fn parse(&self, text: &str) -> Result<Tree, MalformedTreeError> {
        let mut scan = Scan::new(&self.options);
        for (index, line) in text.lines().enumerate() {
            scan.feed(index + 1, line)?;
        }
        let tree = scan.finish()?;
        tracing::debug!(nodes = tree.len(), "parsed dependency tree");
        Ok(tree)
    }
}

enum State {
    AwaitingRoot,
    Body(Body),
}

struct Body {
    builder: TreeBuilder,
    /// depth -> most recently attached node at that depth
    latest: Vec<NodeId>,
    previous_depth: usize,
}

impl Body {
    fn attach(
        &mut self,
        depth: usize,
        data: NodeData,
        strict: bool,
    ) -> Result<(), LineDefect> {
        let parent = *self
            .latest
            .get(depth - 1)
            .ok_or(LineDefect::OrphanNode { depth })?;
        // The entry exists but belongs to an earlier, closed branch.
        if strict && depth > self.previous_depth + 1 {
            return Err(LineDefect::DepthJump {
                depth,
                previous: self.previous_depth,
            });
        }

        let id = self.builder.push_child(parent, data);
        debug_assert_eq!(self.builder.depth_of(id), depth);
        if depth < self.latest.len() {
            self.latest[depth] = id;
        } else {
            self.latest.push(id);
        }
        self.previous_depth = depth;
        Ok(())
    }
}

/// Where each node came from, for order diagnostics
struct Origin<'t> {
    line_number: usize,
    line: &'t str,
    order: usize,
}

struct Scan<'o, 't> {
    options: &'o ParserOptions,
    state: State,
    sentence: Option<String>,
    origins: Vec<Origin<'t>>,
}

impl<'o, 't> Scan<'o, 't> {
    fn new(options: &'o ParserOptions) -> Self {
        Self {
            options,
            state: State::AwaitingRoot,
            sentence: None,
            origins: Vec::new(),
        }
    }

    fn feed(&mut self, line_number: usize, line: &'t str) -> Result<(), MalformedTreeError> {
        let fail = |defect| MalformedTreeError::at(line_number, line, defect);

        match classify_line(line, self.options) {
            LineKind::Blank | LineKind::ParseHeader => Ok(()),
            LineKind::InputHeader(sentence) => {
                if self.sentence.is_none() {
                    self.sentence = Some(sentence.to_string());
                }
                Ok(())
            }
            LineKind::Content(text) => match self.state {
                State::AwaitingRoot => {
                    let data = parse_fields(text).map_err(fail)?;
                    self.origins.push(Origin {
                        line_number,
                        line,
                        order: data.order,
                    });
                    tracing::trace!(line_number, word = %data.word, "root");
                    let builder = TreeBuilder::new(data);
                    self.state = State::Body(Body {
                        latest: vec![builder.root()],
                        builder,
                        previous_depth: 0,
                    });
                    Ok(())
                }
                State::Body(_) => Err(fail(LineDefect::MissingMarker)),
            },
            LineKind::Branch(Branch { column, fields }) => {
                let depth = depth_for_column(column, self.options).map_err(fail)?;
                let State::Body(body) = &mut self.state else {
                    return Err(fail(LineDefect::OrphanNode { depth }));
                };
                let data = parse_fields(fields).map_err(fail)?;
                let order = data.order;
                tracing::trace!(line_number, depth, word = %data.word, "attach");
                body.attach(depth, data, self.options.strict_depth)
                    .map_err(fail)?;
                self.origins.push(Origin {
                    line_number,
                    line,
                    order,
                });
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<Tree, MalformedTreeError> {
        let State::Body(body) = self.state else {
            return Err(MalformedTreeError::NoRoot);
        };
        if self.options.require_contiguous_order {
            check_orders(&self.origins)?;
        }
        let builder = match self.sentence {
            Some(sentence) => body.builder.with_sentence(sentence),
            None => body.builder,
        };
        Ok(builder.finish())
    }
}

/// Orders must cover `0..N` exactly once
fn check_orders(origins: &[Origin<'_>]) -> Result<(), MalformedTreeError> {
    let count = origins.len();
    let mut seen = vec![false; count];
    for origin in origins {
        let defect = match seen.get_mut(origin.order) {
            None => LineDefect::OrderOutOfRange {
                order: origin.order + 1,
                count,
            },
            Some(slot) if *slot => LineDefect::DuplicateOrder {
                order: origin.order + 1,
            },
            Some(slot) => {
                *slot = true;
                continue;
            }
        };
        return Err(MalformedTreeError::at(
            origin.line_number,
            origin.line,
            defect,
        ));
    }
    Ok(())
}
