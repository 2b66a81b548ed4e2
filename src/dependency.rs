//! Dependency-parse model consumed by the graph builder.
//!
//! The parser itself lives outside this crate. What arrives here is one
//! [`DepTree`] per sentence: an ordered list of [`DepNode`]s, each pointing at
//! its syntactic head by index, plus the semantic (PropBank-style) heads the
//! parser attached to it.
//!
//! Trees are validated once, in [`DepTreeBuilder::build`], so the graph
//! builder can walk them without any failure paths of its own.
//!
//! ```
//! use layered_srgraph::{DepNode, DepTree};
//!
//! let tree = DepTree::builder()
//!     .node(DepNode::new("Birds", "NNS", "nsubj").with_head(1))
//!     .node(DepNode::new("sing", "VBP", "root"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tree.first_root().form(), "sing");
//! assert_eq!(tree.first_root().dependents().count(), 1);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use pathfinding::prelude::topological_sort;
use thiserror::Error;

static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identity of a built [`DepTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(usize);

impl TreeId {
    fn next() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Stable identity of a syntactic node: the tree it belongs to plus its
/// position in that tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub tree: TreeId,
    pub index: usize,
}

/// A predicate this node is an argument of, as annotated by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticHead {
    /// Index of the predicate node within the same tree
    pub head: usize,
    /// Raw role label (e.g. `A0`, `AM-LOC`)
    pub label: String,
}

/// One token of a dependency parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepNode {
    pub form: String,
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Dependency label towards `head`
    pub label: String,
    /// Index of the syntactic head; `None` for a structural root
    pub head: Option<usize>,
    pub semantic_heads: Vec<SemanticHead>,
}

impl DepNode {
    /// Create a headless node. The lemma defaults to the lowercased form.
    pub fn new(form: impl Into<String>, pos: impl Into<String>, label: impl Into<String>) -> Self {
        let form = form.into();
        Self {
            lemma: form.to_lowercase(),
            form,
            pos: pos.into(),
            label: label.into(),
            head: None,
            semantic_heads: Vec::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }

    /// Mark this node as an argument of the predicate at `head` under `label`.
    pub fn with_semantic_head(mut self, head: usize, label: impl Into<String>) -> Self {
        self.semantic_heads.push(SemanticHead {
            head,
            label: label.into(),
        });
        self
    }
}

/// Reasons a dependency tree is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("dependency tree has no nodes")]
    Empty,

    #[error("node {node} points at head {head}, but the tree has {len} nodes")]
    HeadOutOfRange { node: usize, head: usize, len: usize },

    #[error("node {node} has semantic head {head}, but the tree has {len} nodes")]
    SemanticHeadOutOfRange { node: usize, head: usize, len: usize },

    #[error("dependency tree has no headless root node")]
    NoRoot,

    #[error("head chain through node {node} forms a cycle")]
    Cycle { node: usize },
}

/// Result type for tree construction.
pub type TreeResult<T> = Result<T, TreeError>;

/// Collects nodes in token order and validates them into a [`DepTree`].
#[derive(Debug, Clone, Default)]
pub struct DepTreeBuilder {
    nodes: Vec<DepNode>,
}

impl DepTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes self
    pub fn node(mut self, node: DepNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append a node, returning its index.
    pub fn push(&mut self, node: DepNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Validate the collected nodes and assign the tree a fresh identity.
    pub fn build(self) -> TreeResult<DepTree> {
        let nodes = self.nodes;
        let len = nodes.len();
        if len == 0 {
            return Err(TreeError::Empty);
        }

        let mut dependents = vec![Vec::new(); len];
        for (index, node) in nodes.iter().enumerate() {
            if let Some(head) = node.head {
                if head >= len {
                    return Err(TreeError::HeadOutOfRange {
                        node: index,
                        head,
                        len,
                    });
                }
                dependents[head].push(index);
            }
            for semantic_head in &node.semantic_heads {
                if semantic_head.head >= len {
                    return Err(TreeError::SemanticHeadOutOfRange {
                        node: index,
                        head: semantic_head.head,
                        len,
                    });
                }
            }
        }

        let first_root = nodes
            .iter()
            .position(|node| node.head.is_none())
            .ok_or(TreeError::NoRoot)?;

        let all: Vec<usize> = (0..len).collect();
        topological_sort(&all, |&index| dependents[index].clone())
            .map_err(|node| TreeError::Cycle { node })?;

        Ok(DepTree {
            id: TreeId::next(),
            nodes,
            dependents,
            first_root,
        })
    }
}

/// A validated dependency parse of one sentence.
///
/// Not `Clone`: node identity is derived from the tree's identity, and a copy
/// would silently share it.
#[derive(Debug)]
pub struct DepTree {
    id: TreeId,
    nodes: Vec<DepNode>,
    /// Dependents per node, ascending token order
    dependents: Vec<Vec<usize>>,
    first_root: usize,
}

impl DepTree {
    pub fn builder() -> DepTreeBuilder {
        DepTreeBuilder::new()
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<DepNodeRef<'_>> {
        if index < self.nodes.len() {
            Some(DepNodeRef { tree: self, index })
        } else {
            None
        }
    }

    /// All nodes in token order.
    pub fn nodes(&self) -> impl Iterator<Item = DepNodeRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |index| DepNodeRef { tree: self, index })
    }

    /// The first headless node in token order (the sentence's main predicate).
    pub fn first_root(&self) -> DepNodeRef<'_> {
        DepNodeRef {
            tree: self,
            index: self.first_root,
        }
    }
}

/// Borrowed handle to a node inside a [`DepTree`].
#[derive(Clone, Copy)]
pub struct DepNodeRef<'t> {
    tree: &'t DepTree,
    index: usize,
}

impl<'t> DepNodeRef<'t> {
    pub fn tree(&self) -> &'t DepTree {
        self.tree
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            tree: self.tree.id,
            index: self.index,
        }
    }

    pub fn data(&self) -> &'t DepNode {
        &self.tree.nodes[self.index]
    }

    pub fn form(&self) -> &'t str {
        &self.data().form
    }

    pub fn lemma(&self) -> &'t str {
        &self.data().lemma
    }

    pub fn pos(&self) -> &'t str {
        &self.data().pos
    }

    pub fn label(&self) -> &'t str {
        &self.data().label
    }

    pub fn head(&self) -> Option<DepNodeRef<'t>> {
        let tree = self.tree;
        self.data()
            .head
            .map(|index| DepNodeRef { tree, index })
    }

    /// Direct dependents in token order.
    pub fn dependents(&self) -> impl Iterator<Item = DepNodeRef<'t>> + 't {
        let tree = self.tree;
        tree.dependents[self.index]
            .iter()
            .map(move |&index| DepNodeRef { tree, index })
    }

    /// Predicates this node is an argument of, with their raw role labels.
    pub fn semantic_heads(&self) -> impl Iterator<Item = (DepNodeRef<'t>, &'t str)> + 't {
        let tree = self.tree;
        self.data().semantic_heads.iter().map(move |semantic_head| {
            (
                DepNodeRef {
                    tree,
                    index: semantic_head.head,
                },
                semantic_head.label.as_str(),
            )
        })
    }

    pub fn is_first_root(&self) -> bool {
        self.index == self.tree.first_root
    }
}

impl PartialEq for DepNodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DepNodeRef<'_> {}

impl fmt::Debug for DepNodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepNodeRef")
            .field("index", &self.index)
            .field("form", &self.form())
            .field("label", &self.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birds_sing() -> DepTreeBuilder {
        DepTree::builder()
            .node(DepNode::new("Birds", "NNS", "nsubj").with_head(1))
            .node(DepNode::new("sing", "VBP", "root"))
            .node(DepNode::new("loudly", "RB", "advmod").with_head(1))
            .node(DepNode::new(".", ".", "punct").with_head(1))
    }

    #[test]
    fn builds_dependents_in_token_order() {
        let tree = birds_sing().build().unwrap();
        let root = tree.first_root();

        assert_eq!(root.form(), "sing");
        assert!(root.head().is_none());
        let dependents: Vec<_> = root.dependents().map(|d| d.form()).collect();
        assert_eq!(dependents, vec!["Birds", "loudly", "."]);
        assert_eq!(tree.node(0).unwrap().head(), Some(root));
    }

    #[test]
    fn lemma_defaults_to_lowercase_form() {
        let node = DepNode::new("Birds", "NNS", "nsubj");
        assert_eq!(node.lemma, "birds");
        assert_eq!(node.with_lemma("bird").lemma, "bird");
    }

    #[test]
    fn each_build_gets_a_distinct_identity() {
        let first = birds_sing().build().unwrap();
        let second = birds_sing().build().unwrap();

        assert_ne!(first.id(), second.id());
        assert_ne!(first.first_root().key(), second.first_root().key());
        assert_ne!(first.first_root(), second.first_root());
    }

    #[test]
    fn first_root_is_first_headless_node() {
        let tree = DepTree::builder()
            .node(DepNode::new("Hello", "UH", "root"))
            .node(DepNode::new("world", "NN", "root"))
            .build()
            .unwrap();

        assert_eq!(tree.first_root().index(), 0);
        assert!(tree.first_root().is_first_root());
        assert!(!tree.node(1).unwrap().is_first_root());
    }

    #[test]
    fn semantic_heads_resolve_to_nodes() {
        let tree = DepTree::builder()
            .node(DepNode::new("Birds", "NNS", "nsubj").with_head(1).with_semantic_head(1, "A0"))
            .node(DepNode::new("sing", "VBP", "root"))
            .build()
            .unwrap();

        let heads: Vec<_> = tree
            .node(0)
            .unwrap()
            .semantic_heads()
            .map(|(head, label)| (head.form(), label))
            .collect();
        assert_eq!(heads, vec![("sing", "A0")]);
    }

    #[test]
    fn rejects_empty_tree() {
        assert_eq!(DepTree::builder().build().unwrap_err(), TreeError::Empty);
    }

    #[test]
    fn rejects_head_out_of_range() {
        let err = DepTree::builder()
            .node(DepNode::new("sing", "VBP", "root"))
            .node(DepNode::new("Birds", "NNS", "nsubj").with_head(7))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            TreeError::HeadOutOfRange {
                node: 1,
                head: 7,
                len: 2
            }
        );
        assert_eq!(err.to_string(), "node 1 points at head 7, but the tree has 2 nodes");
    }

    #[test]
    fn rejects_semantic_head_out_of_range() {
        let err = DepTree::builder()
            .node(DepNode::new("sing", "VBP", "root").with_semantic_head(3, "A1"))
            .build()
            .unwrap_err();

        assert!(matches!(err, TreeError::SemanticHeadOutOfRange { node: 0, head: 3, .. }));
    }

    #[test]
    fn rejects_tree_without_root() {
        let err = DepTree::builder()
            .node(DepNode::new("a", "DT", "det").with_head(1))
            .node(DepNode::new("b", "NN", "dep").with_head(0))
            .build()
            .unwrap_err();

        assert_eq!(err, TreeError::NoRoot);
    }

    #[test]
    fn rejects_cycle_beside_a_root() {
        let err = DepTree::builder()
            .node(DepNode::new("sing", "VBP", "root"))
            .node(DepNode::new("a", "DT", "dep").with_head(2))
            .node(DepNode::new("b", "NN", "dep").with_head(1))
            .build()
            .unwrap_err();

        assert!(matches!(err, TreeError::Cycle { .. }));
    }

    #[test]
    fn rejects_self_headed_node() {
        let err = DepTree::builder()
            .node(DepNode::new("sing", "VBP", "root"))
            .node(DepNode::new("a", "DT", "dep").with_head(1))
            .build()
            .unwrap_err();

        assert_eq!(err, TreeError::Cycle { node: 1 });
    }
}
