//! Text splices over an unmodified source
//!
//! All offsets refer to the original text. Splices are applied in offset
//! order; splices at the same offset keep the order they were added in.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Splice {
    range: Range<usize>,
    text: String,
}

/// Pending edits against one source text
#[derive(Debug)]
pub struct EditBuffer<'a> {
    source: &'a str,
    splices: Vec<Splice>,
}

impl<'a> EditBuffer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            splices: Vec::new(),
        }
    }

    pub fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.replace(at..at, text);
    }

    pub fn replace(&mut self, range: Range<usize>, text: impl Into<String>) {
        self.splices.push(Splice {
            range,
            text: text.into(),
        });
    }

    /// Produce the edited text
    pub fn apply(mut self) -> String {
        self.splices.sort_by_key(|s| s.range.start);

        let added: usize = self.splices.iter().map(|s| s.text.len()).sum();
        let mut out = String::with_capacity(self.source.len() + added);
        let mut cursor = 0;
        for splice in &self.splices {
            let start = splice.range.start.max(cursor);
            out.push_str(&self.source[cursor..start]);
            out.push_str(&splice.text);
            cursor = splice.range.end.max(start);
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_without_splices() {
        let buffer = EditBuffer::new("const a = 1;\n");
        assert_eq!(buffer.apply(), "const a = 1;\n");
    }

    #[test]
    fn test_same_offset_keeps_insertion_order() {
        let mut buffer = EditBuffer::new("tail");
        buffer.insert(0, "first ");
        buffer.insert(0, "second ");
        assert_eq!(buffer.apply(), "first second tail");
    }

    #[test]
    fn test_out_of_order_splices() {
        let mut buffer = EditBuffer::new("import { A } from \"a\";");
        buffer.replace(7..12, "{ A, B }");
        buffer.insert(0, "// header\n");
        assert_eq!(buffer.apply(), "// header\nimport { A, B } from \"a\";");
    }
}
