#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Semantic role graphs built from dependency parses.
//!
//! Each content word of a parsed sentence becomes an [`Instance`]; instances
//! are linked by predicate-argument edges (who does what to whom) and
//! attribute edges (modification), with prepositional phrases attached to
//! their object rather than to the preposition token.
//!
//! ## Core Types
//!
//! - [`DepTree`] / [`DepNode`] - Validated dependency parse of one sentence
//! - [`SemanticRules`] - Tag conventions, argument and attribute detection
//! - [`EnglishRules`] - Stock rules for ClearNLP-style English parses
//! - [`Document`] - Owns the instance arena and the sentence roots
//! - [`Relation`] - Argument / attribute / plain classification of a node
//!
//! ## Example
//!
//! ```
//! use layered_srgraph::{DepNode, DepTree, Document, EnglishRules, SemanticType};
//!
//! // "I sat in the park", with `in` annotated as a locative of `sat`
//! let tree = DepTree::builder()
//!     .node(DepNode::new("I", "PRP", "nsubj").with_head(1))
//!     .node(DepNode::new("sat", "VBD", "root"))
//!     .node(DepNode::new("in", "IN", "prep").with_head(1).with_semantic_head(1, "AM-LOC"))
//!     .node(DepNode::new("the", "DT", "det").with_head(4))
//!     .node(DepNode::new("park", "NN", "pobj").with_head(2))
//!     .build()
//!     .unwrap();
//!
//! let mut doc = Document::new();
//! doc.add_instances(&EnglishRules::new(), &tree);
//!
//! let sat = doc.instance(doc.sentence_roots()[0]).unwrap();
//! let location = sat.arguments(SemanticType::Locative)[0];
//! assert_eq!(doc.instance(location).unwrap().form(), "park");
//! ```

mod classify;
mod config;
mod dependency;
mod display;
mod document;
mod instance;
mod preposition;
mod registry;
mod rules;
mod semantic_type;

pub use classify::{classify, Relation};
pub use config::{ConfigError, ConfigResult, GraphConfig, DEFAULT_PUNCTUATION_TAGS};
pub use dependency::{
    DepNode, DepNodeRef, DepTree, DepTreeBuilder, NodeKey, SemanticHead, TreeError, TreeId,
    TreeResult,
};
pub use display::DocumentDisplay;
pub use document::{Document, Traversal};
pub use instance::{EdgeList, Instance, InstanceId, InstanceNode};
pub use preposition::{resolve_preposition, PrepositionResolution};
pub use registry::InstanceRegistry;
pub use rules::{EnglishRules, SemanticRules};
pub use semantic_type::{AttributeType, SemanticType};
