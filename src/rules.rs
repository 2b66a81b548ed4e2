//! The capabilities the graph builder consumes from its surroundings.
//!
//! [`SemanticRules`] is the seam: tag conventions, label mapping, argument
//! extraction and attribute detection all come through it, so the builder
//! never hard-codes a parser's tag set. [`EnglishRules`] is the stock
//! implementation for ClearNLP-style English parses.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::config::GraphConfig;
use crate::dependency::DepNodeRef;
use crate::semantic_type::{AttributeType, SemanticType};

/// Linguistic decisions the graph builder delegates.
///
/// All methods are pure.
pub trait SemanticRules {
    /// True when a node with this POS tag must be left out of the graph.
    fn is_punctuation(&self, pos: &str) -> bool;

    /// Role for a plain syntactic relation with this dependency label.
    fn semantic_type(&self, label: &str) -> SemanticType {
        SemanticType::from_label(label)
    }

    /// Predicates `node` is an argument of, one entry per role.
    ///
    /// Each entry pairs the role with the predicate node.
    fn arguments<'t>(&self, node: DepNodeRef<'t>) -> Vec<(SemanticType, DepNodeRef<'t>)>;

    /// Modifier category of `node` relative to `head`, if any.
    fn attribute(&self, node: DepNodeRef<'_>, head: DepNodeRef<'_>) -> Option<AttributeType>;

    fn is_preposition(&self, label: &str) -> bool {
        label == "prep"
    }

    fn is_preposition_object(&self, label: &str) -> bool {
        label == "pobj"
    }
}

static ATTRIBUTE_LABELS: Lazy<HashMap<&'static str, AttributeType>> = Lazy::new(|| {
    let entries: &[(&str, AttributeType)] = &[
        ("amod", AttributeType::Quality),
        ("partmod", AttributeType::Quality),
        ("infmod", AttributeType::Quality),
        ("num", AttributeType::Quantity),
        ("nummod", AttributeType::Quantity),
        ("quantmod", AttributeType::Quantity),
        ("poss", AttributeType::Possession),
        ("possessive", AttributeType::Possession),
        ("neg", AttributeType::Negation),
        ("tmod", AttributeType::Time),
        ("npadvmod", AttributeType::Time),
    ];

    entries.iter().copied().collect()
});

/// Rules for ClearNLP-style English dependency parses.
///
/// Arguments come from the semantic heads the parser attached to each node;
/// attributes come from a fixed table of modifier labels.
#[derive(Debug, Clone)]
pub struct EnglishRules {
    config: GraphConfig,
    punctuation: HashSet<String>,
}

impl Default for EnglishRules {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl EnglishRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let punctuation = config.punctuation_tags.iter().cloned().collect();
        Self {
            config,
            punctuation,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }
}

impl SemanticRules for EnglishRules {
    fn is_punctuation(&self, pos: &str) -> bool {
        self.punctuation.contains(pos)
    }

    /// First annotation wins when a node carries the same role twice.
    fn arguments<'t>(&self, node: DepNodeRef<'t>) -> Vec<(SemanticType, DepNodeRef<'t>)> {
        let mut arguments: Vec<(SemanticType, DepNodeRef<'t>)> = Vec::new();
        for (predicate, label) in node.semantic_heads() {
            let role = self.semantic_type(label);
            if arguments.iter().all(|(seen, _)| *seen != role) {
                arguments.push((role, predicate));
            }
        }
        arguments
    }

    fn attribute(&self, node: DepNodeRef<'_>, head: DepNodeRef<'_>) -> Option<AttributeType> {
        let label = node.label().to_ascii_lowercase();
        if label == "advmod" {
            return Some(if head.pos().starts_with("VB") {
                AttributeType::Manner
            } else {
                AttributeType::Quality
            });
        }

        ATTRIBUTE_LABELS.get(label.as_str()).copied()
    }

    fn is_preposition(&self, label: &str) -> bool {
        label == self.config.preposition_label
    }

    fn is_preposition_object(&self, label: &str) -> bool {
        label == self.config.preposition_object_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{DepNode, DepTree};

    fn quickly_ran() -> DepTree {
        DepTree::builder()
            .node(DepNode::new("two", "CD", "num").with_head(1))
            .node(DepNode::new("dogs", "NNS", "nsubj").with_head(2).with_semantic_head(2, "A0"))
            .node(DepNode::new("ran", "VBD", "root"))
            .node(DepNode::new("quickly", "RB", "advmod").with_head(2).with_semantic_head(2, "AM-MNR"))
            .node(DepNode::new("very", "RB", "advmod").with_head(3))
            .node(DepNode::new(".", ".", "punct").with_head(2))
            .build()
            .unwrap()
    }

    #[test]
    fn punctuation_uses_configured_tags() {
        let rules = EnglishRules::new();
        assert!(rules.is_punctuation("."));
        assert!(rules.is_punctuation("-LRB-"));
        assert!(!rules.is_punctuation("NN"));

        let rules = EnglishRules::with_config(GraphConfig::new().with_punctuation_tags(&["PUNCT"]));
        assert!(rules.is_punctuation("PUNCT"));
        assert!(!rules.is_punctuation("."));
    }

    #[test]
    fn arguments_come_from_semantic_heads() {
        let tree = quickly_ran();
        let rules = EnglishRules::new();

        let arguments = rules.arguments(tree.node(1).unwrap());
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].0, SemanticType::A0);
        assert_eq!(arguments[0].1.form(), "ran");

        assert!(rules.arguments(tree.node(0).unwrap()).is_empty());
    }

    #[test]
    fn duplicate_roles_keep_first_annotation() {
        let tree = DepTree::builder()
            .node(DepNode::new("go", "VB", "root"))
            .node(DepNode::new("stop", "VB", "conj").with_head(0))
            .node(
                DepNode::new("it", "PRP", "dobj")
                    .with_head(1)
                    .with_semantic_head(1, "A1")
                    .with_semantic_head(0, "A1"),
            )
            .build()
            .unwrap();

        let arguments = EnglishRules::new().arguments(tree.node(2).unwrap());
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].1.form(), "stop");
    }

    #[test]
    fn attribute_categories() {
        let tree = quickly_ran();
        let rules = EnglishRules::new();
        let node = |i| tree.node(i).unwrap();

        assert_eq!(rules.attribute(node(0), node(1)), Some(AttributeType::Quantity));
        assert_eq!(rules.attribute(node(3), node(2)), Some(AttributeType::Manner));
        assert_eq!(rules.attribute(node(4), node(3)), Some(AttributeType::Quality));
        assert_eq!(rules.attribute(node(1), node(2)), None);
    }

    #[test]
    fn preposition_labels_follow_config() {
        let rules = EnglishRules::new();
        assert!(rules.is_preposition("prep"));
        assert!(rules.is_preposition_object("pobj"));

        let rules = EnglishRules::with_config(GraphConfig::new().with_preposition_labels("case", "obl"));
        assert!(rules.is_preposition("case"));
        assert!(!rules.is_preposition("prep"));
        assert!(rules.is_preposition_object("obl"));
    }
}
