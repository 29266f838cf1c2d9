//! Arc diagrams
//!
//! Flattens a [`Tree`] into the word/arc structure consumed by arc-diagram
//! renderers (displaCy's JSON layout). Words are indexed by sentence order;
//! there is one arc per tree edge, spanning the two words it connects.

use crate::error::InvariantViolation;
use crate::tree::{Edge, Tree};
use serde::{Deserialize, Serialize};

/// A sentence laid out as words plus the dependencies between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcDiagram {
    /// `words[i]` is the i-th word of the sentence
    pub words: Vec<Word>,
    pub arcs: Vec<DependencyArc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyArc {
    pub dir: Direction,
    /// Lower word index of the two endpoints
    pub start: usize,
    /// Higher word index of the two endpoints
    pub end: usize,
    /// Role of the dependent
    pub label: String,
}

/// `Right` when the head precedes its dependent in the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl DependencyArc {
    fn from_edge(edge: Edge<'_>) -> Self {
        let head = edge.parent.order;
        let dependent = edge.child.order;
        Self {
            dir: if head < dependent {
                Direction::Right
            } else {
                Direction::Left
            },
            start: head.min(dependent),
            end: head.max(dependent),
            label: edge.child.role.clone(),
        }
    }
}

/// Flatten a tree into words in sentence order and one arc per edge.
///
/// Arcs come out in pre-order of their dependents; consumers should not
/// rely on that order.
pub fn to_arc_diagram(tree: &Tree) -> Result<ArcDiagram, InvariantViolation> {
    let words = tree
        .sentence_order()?
        .into_iter()
        .map(|node| Word {
            tag: node.tag.clone(),
            text: node.word.clone(),
        })
        .collect();
    let arcs: Vec<DependencyArc> = tree.edges().into_iter().map(DependencyArc::from_edge).collect();

    tracing::debug!(words = tree.len(), arcs = arcs.len(), "built arc diagram");
    Ok(ArcDiagram { words, arcs })
}

impl TryFrom<&Tree> for ArcDiagram {
    type Error = InvariantViolation;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        to_arc_diagram(tree)
    }
}
