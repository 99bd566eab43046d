//! Document model - an ordered sequence of text lines
//!
//! A `Document` is a value: editing never mutates one in place, every edit
//! produces a fresh document. Offsets within a line are character offsets,
//! not byte offsets, so multi-byte UTF-8 addresses correctly.

/// Line separator used when splitting source text and rejoining lines.
pub const LINE_SEPARATOR: char = '\n';

/// An ordered sequence of text lines treated as the unit of editing.
///
/// A line normally contains no terminator, but the `Newline` edit embeds one
/// inside a line's content on purpose (see [`crate::edit::EditOp::Newline`]),
/// so no invariant forbids it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create an empty document (a single empty line, matching `"".split('\n')`)
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a document by splitting source text on the line separator
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split(LINE_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Create a document from pre-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            lines: if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            },
        }
    }

    /// Number of lines in the document (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index, None if out of bounds
    pub fn line(&self, line_index: usize) -> Option<&str> {
        self.lines.get(line_index).map(String::as_str)
    }

    /// All lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of a line in characters, None if the index is out of bounds
    pub fn line_len(&self, line_index: usize) -> Option<usize> {
        self.lines.get(line_index).map(|l| l.chars().count())
    }

    /// Return a copy of this document with the addressed line replaced.
    ///
    /// Callers must have validated `line_index` first.
    pub(crate) fn with_line(&self, line_index: usize, content: String) -> Self {
        let mut lines = self.lines.clone();
        lines[line_index] = content;
        Self { lines }
    }

    /// Serialize by rejoining all lines with the line separator
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Serialize with a caller-chosen separator (e.g. `"\r\n"` from config)
    pub fn to_text_with_separator(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character offset into a byte offset within `line`.
///
/// Offsets past the end clamp to the line's byte length.
pub(crate) fn char_to_byte(line: &str, char_offset: usize) -> usize {
    line.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
