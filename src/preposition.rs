//! Prepositional attachment.
//!
//! A preposition is rarely what a predicate is about: in "saw him in the
//! park" the locative argument is `park`. [`resolve_preposition`] walks the
//! preposition's subtree breadth-first, picks the first node labelled as the
//! object of the preposition, and folds every other subtree node into it as a
//! quality attribute plus an `aux` argument.
//!
//! Dependents are enumerated in token order, so "first match" and the
//! fallback both depend on that order.

use std::collections::VecDeque;

use crate::dependency::DepNodeRef;
use crate::document::Traversal;
use crate::instance::InstanceId;
use crate::registry::InstanceRegistry;
use crate::rules::SemanticRules;
use crate::semantic_type::{AttributeType, SemanticType};

/// Outcome of resolving one preposition subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepositionResolution {
    /// Instance standing in for the whole prepositional phrase
    pub object: InstanceId,
    /// False when no object-labelled node existed and `object` fell back to
    /// the first node visited (the preposition itself)
    pub found_object: bool,
    /// Instances folded into `object`, in visiting order
    pub folded: Vec<InstanceId>,
}

/// Resolve `preposition` to its semantic object, instantiating and visiting
/// every non-punctuation node of its subtree along the way.
pub fn resolve_preposition<R: SemanticRules + ?Sized>(
    rules: &R,
    registry: &mut InstanceRegistry,
    traversal: &mut Traversal,
    sentence: usize,
    preposition: DepNodeRef<'_>,
) -> PrepositionResolution {
    let mut queue = VecDeque::from([preposition]);
    let mut found = None;
    let mut candidates = Vec::new();

    while let Some(node) = queue.pop_front() {
        queue.extend(node.dependents());

        // Punctuation below the preposition stays out of the graph; the
        // preposition itself is always taken.
        if node != preposition && rules.is_punctuation(node.pos()) {
            continue;
        }

        let id = registry.get_or_create(node, sentence);
        traversal.mark(node.key());

        if found.is_none() && rules.is_preposition_object(node.label()) {
            found = Some(id);
        } else {
            candidates.push(id);
        }
    }

    let found_object = found.is_some();
    let object = match found {
        Some(id) => id,
        // The preposition itself is the first candidate whenever nothing was found.
        None => candidates.remove(0),
    };

    for &candidate in &candidates {
        registry.link_attribute(object, AttributeType::Quality, candidate);
        registry.link_argument(object, SemanticType::Aux, candidate);
    }

    tracing::debug!(
        preposition = preposition.form(),
        object = object.index(),
        found_object,
        folded = candidates.len(),
        "resolved prepositional attachment"
    );

    PrepositionResolution {
        object,
        found_object,
        folded: candidates,
    }
}
