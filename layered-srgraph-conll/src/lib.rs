#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! CoNLL reader for layered-srgraph.
//!
//! Turns the tab-separated output of a dependency parser (ClearNLP column
//! layout, including the semantic head column) into validated
//! [`DepTree`](layered_srgraph::DepTree)s ready for
//! [`Document::add_instances`](layered_srgraph::Document::add_instances).
//!
//! ## Example
//!
//! ```
//! use layered_srgraph::{Document, EnglishRules};
//! use layered_srgraph_conll::parse_conll;
//!
//! let trees = parse_conll("1\tBirds\tbird\tNNS\t_\t2\tnsubj\t2:A0\n2\tsing\tsing\tVBP\t_\t0\troot\t_\n").unwrap();
//!
//! let mut doc = Document::new();
//! doc.add_tree_list(&EnglishRules::new(), &trees);
//! assert_eq!(doc.len(), 2);
//! ```

pub mod errors;
pub mod reader;

pub use errors::{ConllError, ConllResult};
pub use reader::{load_conll, parse_conll};
