use std::collections::HashSet;
use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::document::Document;
use crate::instance::{Instance, InstanceId};

/// Convert a zero-based index to a base-26 label: A, B, ..., Z, AA, AB, ..., AZ, BA, ...
/// Similar to Excel column naming.
fn index_to_base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

fn instance_label(id: InstanceId) -> String {
    format!("[{}]", index_to_base26_label(id.index()))
}

/// Text rendering of a [`Document`]'s graph, one block per instance in
/// creation order.
pub struct DocumentDisplay<'a> {
    doc: &'a Document,
    show_predicates: bool,
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(doc: &'a Document) -> Self {
        DocumentDisplay {
            doc,
            show_predicates: true,
        }
    }

    /// Takes self. Hide the mirrored predicate-list half of each edge.
    pub fn without_predicates(mut self) -> Self {
        self.show_predicates = false;
        self
    }

    fn target(&self, id: InstanceId) -> String {
        let form = self.doc.instance(id).map_or("?", Instance::form);
        format!("{} {}", instance_label(id), form)
    }

    fn edge_lines(&self, inst: &Instance) -> Vec<String> {
        let mut lines = Vec::new();
        for (role, ids) in inst.argument_list() {
            for &id in ids {
                lines.push(format!("{}─>{}", role, self.target(id)));
            }
        }
        if self.show_predicates {
            for (role, ids) in inst.predicate_list() {
                for &id in ids {
                    lines.push(format!("{}<─{}", role, self.target(id)));
                }
            }
        }
        for (category, ids) in inst.attribute_list() {
            for &id in ids {
                lines.push(format!("{}<─>{}", category, self.target(id)));
            }
        }
        lines
    }
}

// [B] saw   root (sentence root)
//     ├─locative─>[E] park        B takes E as its locative argument
//     └─object─>[C] him
// [E] park  pobj
//     ├─locative<─[B] saw         mirror of the edge above
//     └─quality<─>[F] the         attribute edge, written on both ends
impl fmt::Display for DocumentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form_width = self
            .doc
            .instances()
            .map(|inst| UnicodeWidthStr::width(inst.form()))
            .max()
            .unwrap_or(0);
        let roots: HashSet<InstanceId> = self.doc.sentence_roots().iter().copied().collect();

        let mut is_first = true;
        for inst in self.doc.instances() {
            if is_first {
                is_first = false;
            } else {
                f.write_char('\n')?;
            }

            write!(f, "{} {}", instance_label(inst.id()), inst.form())?;
            for _ in UnicodeWidthStr::width(inst.form())..form_width {
                f.write_char(' ')?;
            }
            write!(f, "  {}", inst.node().label)?;
            if roots.contains(&inst.id()) {
                f.write_str(" (sentence root)")?;
            }

            let lines = self.edge_lines(inst);
            for (idx, line) in lines.iter().enumerate() {
                let branch = if idx + 1 == lines.len() { '└' } else { '├' };
                write!(f, "\n    {}─{}", branch, line)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_base26_label() {
        assert_eq!(index_to_base26_label(0), "A");
        assert_eq!(index_to_base26_label(25), "Z");
        assert_eq!(index_to_base26_label(26), "AA");
        assert_eq!(index_to_base26_label(51), "AZ");
        assert_eq!(index_to_base26_label(52), "BA");
        assert_eq!(index_to_base26_label(701), "ZZ");
        assert_eq!(index_to_base26_label(702), "AAA");
    }

    #[test]
    fn empty_document_renders_nothing() {
        let doc = Document::new();
        assert_eq!(doc.display().to_string(), "");
    }
}
