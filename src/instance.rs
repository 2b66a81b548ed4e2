//! Semantic graph nodes.
//!
//! An [`Instance`] is the semantic counterpart of exactly one syntactic node.
//! Instances never own each other: every cross-reference is an
//! [`InstanceId`] into the arena held by the
//! [`InstanceRegistry`](crate::InstanceRegistry).

use std::collections::BTreeMap;

use crate::dependency::{DepNodeRef, NodeKey};
use crate::semantic_type::{AttributeType, SemanticType};

/// Index of an [`Instance`] within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) usize);

impl InstanceId {
    /// Position in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Owned copy of the syntactic node an instance wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceNode {
    pub key: NodeKey,
    pub form: String,
    pub lemma: String,
    pub pos: String,
    pub label: String,
}

impl InstanceNode {
    pub fn from_dep(node: DepNodeRef<'_>) -> Self {
        Self {
            key: node.key(),
            form: node.form().to_string(),
            lemma: node.lemma().to_string(),
            pos: node.pos().to_string(),
            label: node.label().to_string(),
        }
    }
}

/// Edge lists keyed by role or category, each holding instances in the order
/// the edges were written.
pub type EdgeList<K> = BTreeMap<K, Vec<InstanceId>>;

/// A semantic node with its predicate-argument and attribute edges.
#[derive(Debug, Clone)]
pub struct Instance {
    id: InstanceId,
    node: InstanceNode,
    sentence: usize,
    /// role -> instances this one takes as arguments
    argument_list: EdgeList<SemanticType>,
    /// role -> instances this one is an argument of
    predicate_list: EdgeList<SemanticType>,
    attribute_list: EdgeList<AttributeType>,
}

impl Instance {
    pub(crate) fn new(id: InstanceId, node: InstanceNode, sentence: usize) -> Self {
        Self {
            id,
            node,
            sentence,
            argument_list: BTreeMap::new(),
            predicate_list: BTreeMap::new(),
            attribute_list: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn node(&self) -> &InstanceNode {
        &self.node
    }

    pub fn form(&self) -> &str {
        &self.node.form
    }

    /// Index of the sentence being added when this instance was created.
    pub fn sentence(&self) -> usize {
        self.sentence
    }

    pub fn argument_list(&self) -> &EdgeList<SemanticType> {
        &self.argument_list
    }

    pub fn predicate_list(&self) -> &EdgeList<SemanticType> {
        &self.predicate_list
    }

    pub fn attribute_list(&self) -> &EdgeList<AttributeType> {
        &self.attribute_list
    }

    /// Arguments this instance takes under `role`.
    pub fn arguments(&self, role: SemanticType) -> &[InstanceId] {
        self.argument_list.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Predicates this instance is an argument of under `role`.
    pub fn predicates(&self, role: SemanticType) -> &[InstanceId] {
        self.predicate_list.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn attributes(&self, category: AttributeType) -> &[InstanceId] {
        self.attribute_list.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no edge of any kind touches this instance.
    pub fn is_isolated(&self) -> bool {
        self.argument_list.is_empty()
            && self.predicate_list.is_empty()
            && self.attribute_list.is_empty()
    }

    pub(crate) fn put_argument(&mut self, role: SemanticType, argument: InstanceId) {
        self.argument_list.entry(role).or_default().push(argument);
    }

    pub(crate) fn put_predicate(&mut self, role: SemanticType, predicate: InstanceId) {
        self.predicate_list.entry(role).or_default().push(predicate);
    }

    pub(crate) fn put_attribute(&mut self, category: AttributeType, other: InstanceId) {
        self.attribute_list.entry(category).or_default().push(other);
    }
}
