//! Document-level graph assembly.
//!
//! A [`Document`] accumulates the semantic graph for any number of
//! dependency trees. Each call to [`Document::add_instances`] walks one tree
//! in token order and, for every node not yet visited:
//!
//! 1. gets or creates the node's [`Instance`] and marks the node visited,
//! 2. registers it as the sentence root if it is the tree's first root,
//! 3. gets or creates the head's instance,
//! 4. classifies the pair (argument / attribute / plain) and writes the
//!    mirrored edges.
//!
//! Argument edges from a preposition are re-routed to the preposition's
//! object (see [`resolve_preposition`]). Argument entries whose predicate is
//! punctuation are dropped. A node whose head is punctuation keeps its
//! argument edges but gets no attribute or plain edge.
//!
//! ```
//! use layered_srgraph::{DepNode, DepTree, Document, EnglishRules, SemanticType};
//!
//! let tree = DepTree::builder()
//!     .node(DepNode::new("Birds", "NNS", "nsubj").with_head(1))
//!     .node(DepNode::new("sing", "VBP", "root"))
//!     .build()
//!     .unwrap();
//!
//! let mut doc = Document::new();
//! doc.add_instances(&EnglishRules::new(), &tree);
//!
//! let sing = doc.instance(doc.sentence_roots()[0]).unwrap();
//! assert_eq!(sing.form(), "sing");
//! assert_eq!(sing.arguments(SemanticType::Subject).len(), 1);
//! ```

use std::collections::HashSet;

use crate::classify::{argument_entries, classify, Relation};
use crate::dependency::{DepNodeRef, DepTree, NodeKey};
use crate::display::DocumentDisplay;
use crate::instance::{Instance, InstanceId};
use crate::preposition::resolve_preposition;
use crate::registry::InstanceRegistry;
use crate::rules::SemanticRules;

/// Nodes already processed while building one document.
///
/// Shared by every tree added to the same document, so adding a tree twice
/// is a no-op the second time.
#[derive(Debug, Default)]
pub struct Traversal {
    visited: HashSet<NodeKey>,
}

impl Traversal {
    pub fn is_visited(&self, key: NodeKey) -> bool {
        self.visited.contains(&key)
    }

    /// Returns false if the node was already visited.
    pub(crate) fn mark(&mut self, key: NodeKey) -> bool {
        self.visited.insert(key)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// The semantic graph of a multi-sentence text.
#[derive(Debug, Default)]
pub struct Document {
    registry: InstanceRegistry,
    traversal: Traversal,
    sentence_roots: Vec<InstanceId>,
    sentence_count: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sentence's dependency tree to the graph.
    pub fn add_instances<R: SemanticRules + ?Sized>(&mut self, rules: &R, tree: &DepTree) {
        let sentence = self.new_sentence();
        let instances_before = self.registry.len();

        let mut assembler = GraphAssembler {
            rules,
            registry: &mut self.registry,
            traversal: &mut self.traversal,
            sentence_roots: &mut self.sentence_roots,
            sentence,
        };
        for node in tree.nodes() {
            assembler.visit(node);
        }

        tracing::debug!(
            tree = ?tree.id(),
            sentence,
            nodes = tree.len(),
            created = self.registry.len() - instances_before,
            "added instances"
        );
    }

    /// Add several trees in order, sharing one registry and one visited set.
    pub fn add_tree_list<'t, R, I>(&mut self, rules: &R, trees: I)
    where
        R: SemanticRules + ?Sized,
        I: IntoIterator<Item = &'t DepTree>,
    {
        for tree in trees {
            self.add_instances(rules, tree);
        }
    }

    fn new_sentence(&mut self) -> usize {
        self.sentence_count += 1;
        self.sentence_count - 1
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.registry.get(id)
    }

    /// Instance wrapping the node with this identity, if one was created.
    pub fn instance_for(&self, key: NodeKey) -> Option<&Instance> {
        self.registry.lookup(key).and_then(|id| self.registry.get(id))
    }

    /// All instances in creation order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> + '_ {
        self.registry.iter()
    }

    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Root instance of each sentence, in the order sentences were added.
    pub fn sentence_roots(&self) -> &[InstanceId] {
        &self.sentence_roots
    }

    /// Number of sentence boundaries marked so far (one per added tree).
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn is_visited(&self, key: NodeKey) -> bool {
        self.traversal.is_visited(key)
    }

    /// Predicate-argument edges plus attribute edges; mirrored halves count once.
    pub fn edge_count(&self) -> usize {
        let arguments: usize = self
            .instances()
            .flat_map(|inst| inst.argument_list().values())
            .map(Vec::len)
            .sum();
        let attributes: usize = self
            .instances()
            .flat_map(|inst| inst.attribute_list().values())
            .map(Vec::len)
            .sum();
        arguments + attributes / 2
    }

    pub fn display(&self) -> DocumentDisplay<'_> {
        DocumentDisplay::new(self)
    }
}

/// Per-call traversal context.
struct GraphAssembler<'d, R: ?Sized> {
    rules: &'d R,
    registry: &'d mut InstanceRegistry,
    traversal: &'d mut Traversal,
    sentence_roots: &'d mut Vec<InstanceId>,
    sentence: usize,
}

impl<R: SemanticRules + ?Sized> GraphAssembler<'_, R> {
    fn visit(&mut self, node: DepNodeRef<'_>) {
        if self.rules.is_punctuation(node.pos()) || self.traversal.is_visited(node.key()) {
            return;
        }

        let node_id = self.registry.get_or_create(node, self.sentence);
        self.traversal.mark(node.key());

        if node.is_first_root() {
            self.sentence_roots.push(node_id);
        }

        // A punctuation head never gets an instance; only the node's own
        // argument edges are wired.
        let (head_id, relation) = match node.head() {
            Some(head) if !self.rules.is_punctuation(head.pos()) => {
                let head_id = self.registry.get_or_create(head, self.sentence);
                (Some(head_id), classify(self.rules, node, head))
            }
            _ if node.head().is_none() => return,
            _ => (None, Relation::Argument(argument_entries(self.rules, node))),
        };
        tracing::trace!(
            node = node.index(),
            form = node.form(),
            relation = relation.kind(),
            "classified"
        );

        match (relation, head_id) {
            (Relation::Argument(arguments), _) => {
                if arguments.is_empty() {
                    return;
                }
                let source_id = if self.rules.is_preposition(node.label()) {
                    resolve_preposition(
                        self.rules,
                        self.registry,
                        self.traversal,
                        self.sentence,
                        node,
                    )
                    .object
                } else {
                    node_id
                };

                for (role, predicate) in arguments {
                    let predicate_id = self.registry.get_or_create(predicate, self.sentence);
                    self.registry.link_argument(predicate_id, role, source_id);
                }
            }
            (Relation::Attribute(category), Some(head_id)) => {
                self.registry.link_attribute(head_id, category, node_id);

                let role = self.rules.semantic_type(node.label());
                self.registry.link_argument(head_id, role, node_id);
            }
            (Relation::Plain, Some(head_id)) => {
                let role = self.rules.semantic_type(node.label());
                self.registry.link_argument(head_id, role, node_id);
            }
            // Attribute and plain relations only come from a classified head.
            (_, None) => {}
        }
    }
}
