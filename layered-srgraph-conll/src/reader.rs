//! Reader for tab-separated dependency parses.
//!
//! Columns follow the ClearNLP layout:
//!
//! ```text
//! id  form  lemma  pos  feats  head  deprel  [sheads]
//! ```
//!
//! `head` is 1-based with `0` for the root. `sheads` lists the predicates a
//! token is an argument of as `head:label` pairs joined by `;`, or `_`.
//! Sentences are separated by blank lines; lines starting with `#` are
//! comments.

use std::fs;
use std::path::Path;

use layered_srgraph::{DepNode, DepTree, DepTreeBuilder};

use crate::errors::{ConllError, ConllResult};

const MIN_COLUMNS: usize = 7;

/// Parse every sentence in `input`.
pub fn parse_conll(input: &str) -> ConllResult<Vec<DepTree>> {
    let mut trees = Vec::new();
    let mut sentence: Option<(usize, DepTreeBuilder)> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim_end();

        if text.trim().is_empty() {
            if let Some((start, builder)) = sentence.take() {
                trees.push(finish(start, builder)?);
            }
            continue;
        }
        if text.trim_start().starts_with('#') {
            continue;
        }

        let (_, builder) = sentence.get_or_insert_with(|| (line, DepTreeBuilder::new()));
        let node = parse_row(line, text, builder.len() + 1)?;
        builder.push(node);
    }

    if let Some((start, builder)) = sentence.take() {
        trees.push(finish(start, builder)?);
    }

    tracing::debug!(sentences = trees.len(), "parsed CoNLL input");
    Ok(trees)
}

/// Read and parse a CoNLL file.
pub fn load_conll(path: impl AsRef<Path>) -> ConllResult<Vec<DepTree>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConllError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_conll(&content)
}

fn finish(start: usize, builder: DepTreeBuilder) -> ConllResult<DepTree> {
    builder
        .build()
        .map_err(|source| ConllError::Tree { line: start, source })
}

fn parse_row(line: usize, text: &str, expected_id: usize) -> ConllResult<DepNode> {
    let columns: Vec<&str> = if text.contains('\t') {
        text.split('\t').map(str::trim).collect()
    } else {
        text.split_whitespace().collect()
    };
    if columns.len() < MIN_COLUMNS {
        return Err(ConllError::Columns {
            line,
            found: columns.len(),
        });
    }

    let id = parse_index(line, "id", columns[0])?;
    if id != expected_id {
        return Err(ConllError::TokenId {
            line,
            expected: expected_id,
            found: id,
        });
    }

    let form = columns[1];
    let mut node = DepNode::new(form, columns[3], columns[6]);
    if columns[2] != "_" {
        node = node.with_lemma(columns[2]);
    }

    let head = parse_index(line, "head", columns[5])?;
    if head > 0 {
        node = node.with_head(head - 1);
    }

    if let Some(sheads) = columns.get(7) {
        for (predicate, label) in parse_semantic_heads(line, sheads)? {
            node = node.with_semantic_head(predicate, label);
        }
    }

    Ok(node)
}

/// `3:A0;5:AM-LOC` -> [(2, "A0"), (4, "AM-LOC")], 0-based.
fn parse_semantic_heads<'a>(line: usize, column: &'a str) -> ConllResult<Vec<(usize, &'a str)>> {
    if column == "_" || column.is_empty() {
        return Ok(Vec::new());
    }

    column
        .split(';')
        .map(|pair| {
            let invalid = || ConllError::Field {
                line,
                column: "sheads",
                value: pair.to_string(),
            };
            let (head, label) = pair.split_once(':').ok_or_else(invalid)?;
            let head: usize = head.parse().map_err(|_| invalid())?;
            if head == 0 || label.is_empty() {
                return Err(invalid());
            }
            Ok((head - 1, label))
        })
        .collect()
}

fn parse_index(line: usize, column: &'static str, value: &str) -> ConllResult<usize> {
    value.parse().map_err(|_| ConllError::Field {
        line,
        column,
        value: value.to_string(),
    })
}
