//! Label conventions used by the stock rules.
//!
//! Parsers disagree on tag sets, so the labels that drive preposition
//! resolution and punctuation skipping can be loaded from TOML:
//!
//! ```toml
//! preposition_label = "case"
//! preposition_object_label = "obl"
//! punctuation_tags = [".", ",", "PUNCT"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`GraphConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// ClearNLP English punctuation tags.
pub const DEFAULT_PUNCTUATION_TAGS: &[&str] = &[
    ".", ",", ":", "``", "''", "-LRB-", "-RRB-", "HYPH", "NFP", "PUNC",
];

/// Configuration for [`EnglishRules`](crate::EnglishRules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Dependency label marking a preposition
    pub preposition_label: String,
    /// Dependency label marking the object of a preposition
    pub preposition_object_label: String,
    /// POS tags that are never given an instance
    pub punctuation_tags: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            preposition_label: "prep".to_string(),
            preposition_object_label: "pobj".to_string(),
            punctuation_tags: DEFAULT_PUNCTUATION_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn with_preposition_labels(
        mut self,
        preposition: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        self.preposition_label = preposition.into();
        self.preposition_object_label = object.into();
        self
    }

    /// Replace the punctuation tag list.
    pub fn with_punctuation_tags(mut self, tags: &[&str]) -> Self {
        self.punctuation_tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }
}
