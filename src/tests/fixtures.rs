//! Hand-built parses shared by the document tests.

use crate::{DepNode, DepTree};

/// "I saw him in the park." with `in` annotated as a locative of `saw`.
pub(crate) fn saw_him_in_the_park() -> DepTree {
    DepTree::builder()
        .node(DepNode::new("I", "PRP", "nsubj").with_head(1))
        .node(DepNode::new("saw", "VBD", "root").with_lemma("see"))
        .node(DepNode::new("him", "PRP", "dobj").with_head(1))
        .node(DepNode::new("in", "IN", "prep").with_head(1).with_semantic_head(1, "AM-LOC"))
        .node(DepNode::new("the", "DT", "det").with_head(5))
        .node(DepNode::new("park", "NN", "pobj").with_head(3))
        .node(DepNode::new(".", ".", "punct").with_head(1))
        .build()
        .unwrap()
}

/// "The old man did not walk his two dogs quickly."
pub(crate) fn old_man_walk_dogs() -> DepTree {
    DepTree::builder()
        .node(DepNode::new("The", "DT", "det").with_head(2))
        .node(DepNode::new("old", "JJ", "amod").with_head(2))
        .node(DepNode::new("man", "NN", "nsubj").with_head(5).with_semantic_head(5, "A0"))
        .node(DepNode::new("did", "VBD", "aux").with_head(5).with_lemma("do"))
        .node(DepNode::new("not", "RB", "neg").with_head(5))
        .node(DepNode::new("walk", "VB", "root"))
        .node(DepNode::new("his", "PRP$", "poss").with_head(8))
        .node(DepNode::new("two", "CD", "num").with_head(8))
        .node(DepNode::new("dogs", "NNS", "dobj").with_head(5).with_semantic_head(5, "A1"))
        .node(DepNode::new("quickly", "RB", "advmod").with_head(5))
        .node(DepNode::new(".", ".", "punct").with_head(5))
        .build()
        .unwrap()
}

/// "She sat and read in the garden." where `in` is a locative of both verbs.
pub(crate) fn sat_and_read_in_the_garden() -> DepTree {
    DepTree::builder()
        .node(DepNode::new("She", "PRP", "nsubj").with_head(1).with_semantic_head(1, "A0"))
        .node(DepNode::new("sat", "VBD", "root").with_lemma("sit"))
        .node(DepNode::new("and", "CC", "cc").with_head(1))
        .node(DepNode::new("read", "VBD", "conj").with_head(1))
        .node(
            DepNode::new("in", "IN", "prep")
                .with_head(3)
                .with_semantic_head(1, "AM-LOC")
                .with_semantic_head(3, "AM-LOC"),
        )
        .node(DepNode::new("the", "DT", "det").with_head(6))
        .node(DepNode::new("garden", "NN", "pobj").with_head(4))
        .node(DepNode::new(".", ".", "punct").with_head(1))
        .build()
        .unwrap()
}

/// "He came in ." with a bare preposition annotated as a direction.
pub(crate) fn came_in() -> DepTree {
    DepTree::builder()
        .node(DepNode::new("He", "PRP", "nsubj").with_head(1))
        .node(DepNode::new("came", "VBD", "root").with_lemma("come"))
        .node(DepNode::new("in", "IN", "prep").with_head(1).with_semantic_head(1, "AM-DIR"))
        .node(DepNode::new(".", ".", "punct").with_head(1))
        .build()
        .unwrap()
}

/// "She smiled ."
pub(crate) fn she_smiled() -> DepTree {
    DepTree::builder()
        .node(DepNode::new("She", "PRP", "nsubj").with_head(1).with_semantic_head(1, "A0"))
        .node(DepNode::new("smiled", "VBD", "root").with_lemma("smile"))
        .node(DepNode::new(".", ".", "punct").with_head(1))
        .build()
        .unwrap()
}

pub(crate) fn all() -> Vec<DepTree> {
    vec![
        saw_him_in_the_park(),
        old_man_walk_dogs(),
        sat_and_read_in_the_garden(),
        came_in(),
        she_smiled(),
    ]
}
