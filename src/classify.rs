//! Relation classification for a (node, head) pair.
//!
//! Argument structure takes strict precedence: when the rules report any
//! predicate for a node, attribute detection is never consulted for it.

use crate::dependency::DepNodeRef;
use crate::rules::SemanticRules;
use crate::semantic_type::{AttributeType, SemanticType};

/// How a node relates to its syntactic head.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation<'t> {
    /// The node is an argument of each listed predicate under the paired role
    Argument(Vec<(SemanticType, DepNodeRef<'t>)>),
    /// The node modifies its head
    Attribute(AttributeType),
    /// Neither; the dependency label alone decides the role
    Plain,
}

impl Relation<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Relation::Argument(_) => "argument",
            Relation::Attribute(_) => "attribute",
            Relation::Plain => "plain",
        }
    }
}

/// Argument entries of `node`, minus any whose predicate is punctuation.
pub(crate) fn argument_entries<'t, R: SemanticRules + ?Sized>(
    rules: &R,
    node: DepNodeRef<'t>,
) -> Vec<(SemanticType, DepNodeRef<'t>)> {
    let mut arguments = rules.arguments(node);
    arguments.retain(|(_, predicate)| !rules.is_punctuation(predicate.pos()));
    arguments
}

pub fn classify<'t, R: SemanticRules + ?Sized>(
    rules: &R,
    node: DepNodeRef<'t>,
    head: DepNodeRef<'t>,
) -> Relation<'t> {
    let arguments = argument_entries(rules, node);
    if !arguments.is_empty() {
        return Relation::Argument(arguments);
    }

    match rules.attribute(node, head) {
        Some(category) => Relation::Attribute(category),
        None => Relation::Plain,
    }
}
