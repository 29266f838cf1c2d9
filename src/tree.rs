//! Dependency tree
//!
//! A [`Tree`] owns its nodes in a flat arena; parent and child links are
//! [`NodeId`] indices into it, so the parent link is a plain back-reference
//! and never an owner. Trees are only assembled through [`TreeBuilder`],
//! which derives every node's depth from its parent, and are immutable
//! once built.
//!
//! Children keep the order in which they were attached (for parsed trees:
//! the left-to-right order of the ASCII drawing), which is generally not
//! sentence order. Sentence order is recovered from [`Node::order`].

use crate::error::InvariantViolation;

/// Index of a node inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The label of a node before it is placed in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub word: String,
    pub tag: String,
    pub role: String,
    /// Zero-based position of the word in the sentence
    pub order: usize,
}

impl NodeData {
    pub fn new(
        word: impl Into<String>,
        tag: impl Into<String>,
        role: impl Into<String>,
        order: usize,
    ) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            role: role.into(),
            order,
        }
    }
}

/// One token of the parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub word: String,
    /// Part-of-speech tag, kept opaque
    pub tag: String,
    /// Grammatical relation to the parent, `ROOT` for the root
    pub role: String,
    /// Zero-based position of the word in the sentence
    pub order: usize,
    /// Distance from the root
    pub depth: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn from_data(data: NodeData, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            word: data.word,
            tag: data.tag,
            role: data.role,
            order: data.order,
            depth,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A parent → child dependency
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    pub parent: &'a Node,
    pub child: &'a Node,
}

/// Incrementally assembles a [`Tree`]
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    sentence: Option<String>,
}

impl TreeBuilder {
    /// Start a tree from its root, which always sits at depth 0
    pub fn new(root: NodeData) -> Self {
        Self {
            nodes: vec![Node::from_data(root, 0, None)],
            sentence: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach a new last child under `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this builder.
    pub fn push_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_data(data, depth, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn depth_of(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// Record the raw sentence the tree was parsed from
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    pub fn finish(self) -> Tree {
        Tree {
            nodes: self.nodes,
            sentence: self.sentence,
        }
    }
}

/// A rooted, connected, acyclic dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    sentence: Option<String>,
}

impl Tree {
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent_of(&self, node: &Node) -> Option<&Node> {
        node.parent.map(|id| self.node(id))
    }

    /// Number of nodes, never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The text that followed the `Input:` header, when there was one
    pub fn sentence(&self) -> Option<&str> {
        self.sentence.as_deref()
    }

    /// All nodes in arena (insertion) order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Depth-first, parent before children, children in attachment order
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root_id()],
        }
    }

    /// Every parent → child pair, in pre-order
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut edges = Vec::with_capacity(self.len() - 1);
        for parent in self.preorder() {
            for &child in &parent.children {
                edges.push(Edge {
                    parent,
                    child: self.node(child),
                });
            }
        }
        edges
    }

    /// Nodes sorted by sentence position.
    ///
    /// Fails unless the orders are exactly `0..len()`.
    pub fn sentence_order(&self) -> Result<Vec<&Node>, InvariantViolation> {
        let mut ordered: Vec<&Node> = self.nodes.iter().collect();
        ordered.sort_by_key(|node| node.order);

        for (position, node) in ordered.iter().enumerate() {
            if node.order != position {
                return Err(InvariantViolation::NonContiguousOrder {
                    position,
                    found: node.order,
                });
            }
        }

        Ok(ordered)
    }

    /// The words joined by single spaces in sentence order
    pub fn to_sentence(&self) -> Result<String, InvariantViolation> {
        let words: Vec<&str> = self
            .sentence_order()?
            .into_iter()
            .map(|node| node.word.as_str())
            .collect();
        Ok(words.join(" "))
    }
}

/// Pre-order iterator over a [`Tree`]
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// impressed ← {I, am, very, .}, attached out of sentence order
    fn impressed() -> Tree {
        let mut builder = TreeBuilder::new(NodeData::new("impressed", "JJ", "ROOT", 3));
        let root = builder.root();
        builder.push_child(root, NodeData::new("I", "PRP", "nsubj", 0));
        builder.push_child(root, NodeData::new("am", "VBP", "cop", 1));
        builder.push_child(root, NodeData::new("very", "RB", "advmod", 2));
        builder.push_child(root, NodeData::new(".", ".", "punct", 4));
        builder.finish()
    }

    #[test]
    fn test_builder_assigns_depths() {
        let mut builder = TreeBuilder::new(NodeData::new("brought", "VBD", "ROOT", 1));
        let pizza = builder.push_child(builder.root(), NodeData::new("pizza", "NN", "dobj", 3));
        let the = builder.push_child(pizza, NodeData::new("the", "DT", "det", 2));
        let tree = builder.finish();

        assert_eq!(tree.root().depth, 0);
        assert!(tree.root().is_root());
        assert_eq!(tree.node(pizza).depth, 1);
        assert_eq!(tree.node(the).depth, 2);
        assert_eq!(tree.parent_of(tree.node(the)).map(|n| n.word.as_str()), Some("pizza"));
    }

    #[test]
    fn test_preorder_visits_parents_first() {
        let mut builder = TreeBuilder::new(NodeData::new("a", "X", "ROOT", 0));
        let b = builder.push_child(builder.root(), NodeData::new("b", "X", "dep", 1));
        builder.push_child(builder.root(), NodeData::new("c", "X", "dep", 2));
        builder.push_child(b, NodeData::new("d", "X", "dep", 3));
        let tree = builder.finish();

        let words: Vec<&str> = tree.preorder().map(|n| n.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_edges_count() {
        let tree = impressed();
        let edges = tree.edges();
        assert_eq!(edges.len(), tree.len() - 1);
        assert!(edges.iter().all(|e| e.parent.word == "impressed"));
    }

    #[test]
    fn test_to_sentence() {
        assert_eq!(impressed().to_sentence().unwrap(), "I am very impressed .");
    }

    #[test]
    fn test_sentence_order_rejects_gaps() {
        let mut builder = TreeBuilder::new(NodeData::new("brought", "VBD", "ROOT", 1));
        builder.push_child(builder.root(), NodeData::new("Bob", "NNP", "nsubj", 0));
        builder.push_child(builder.root(), NodeData::new("and", "CC", "cc", 19));
        let tree = builder.finish();

        assert_eq!(
            tree.sentence_order().unwrap_err(),
            InvariantViolation::NonContiguousOrder {
                position: 2,
                found: 19
            }
        );
    }

    #[test]
    fn test_sentence_is_recorded() {
        let tree = TreeBuilder::new(NodeData::new("go", "VB", "ROOT", 0))
            .with_sentence("go")
            .finish();
        assert_eq!(tree.sentence(), Some("go"));
        assert_eq!(tree.len(), 1);
        assert!(tree.edges().is_empty());
    }
}
