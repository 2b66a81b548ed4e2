//! Error types for the CoNLL reader.

use std::path::PathBuf;

use layered_srgraph::TreeError;
use thiserror::Error;

/// Errors that can occur while reading CoNLL input.
#[derive(Debug, Error)]
pub enum ConllError {
    /// A token row is missing required columns.
    #[error("line {line}: expected at least 7 columns, found {found}")]
    Columns { line: usize, found: usize },

    /// A column value could not be parsed.
    #[error("line {line}: invalid {column} value '{value}'")]
    Field {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// Token ids must run 1, 2, 3, ... within a sentence.
    #[error("line {line}: expected token id {expected}, found {found}")]
    TokenId {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The sentence parsed, but is not a well-formed tree.
    #[error("sentence starting at line {line}: {source}")]
    Tree {
        line: usize,
        #[source]
        source: TreeError,
    },

    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CoNLL reading.
pub type ConllResult<T> = Result<T, ConllError>;
