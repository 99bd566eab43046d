//! Edit operations and the dispatcher that applies them
//!
//! An [`EditOp`] is a tagged variant describing one edit to a single line of
//! a [`Document`]. [`apply`] validates the operation against the document and
//! returns a new document; the input is never mutated, so a failed apply
//! leaves the caller's document exactly as it was.

use serde::{Deserialize, Serialize};

use crate::document::{char_to_byte, Document};

/// One edit against a single line of a document.
///
/// `line_index` is 0-based; `start`/`end` are character offsets into the
/// addressed line with `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOp {
    /// Append a line terminator to the line's content.
    ///
    /// The document's line count does not change: the terminator is embedded
    /// inside the addressed line rather than splitting it in two, so
    /// serializing and re-parsing the document will see an extra line. This
    /// matches the historical behavior of the format and is kept for
    /// compatibility even though it is inconsistent with the other three
    /// operations.
    Newline { line_index: usize },
    /// Replace the character range `[start, end)` with `insert_text`
    Substitute {
        line_index: usize,
        start: usize,
        end: usize,
        insert_text: String,
    },
    /// Insert `insert_text` at `start`, shifting the rest of the line right
    Insert {
        line_index: usize,
        start: usize,
        insert_text: String,
    },
    /// Remove the character range `[start, end)`
    Delete {
        line_index: usize,
        start: usize,
        end: usize,
    },
}

impl EditOp {
    /// The line this operation addresses
    pub fn line_index(&self) -> usize {
        match self {
            EditOp::Newline { line_index }
            | EditOp::Substitute { line_index, .. }
            | EditOp::Insert { line_index, .. }
            | EditOp::Delete { line_index, .. } => *line_index,
        }
    }

    /// Tag name as it appears in serialized scripts
    pub fn kind(&self) -> &'static str {
        match self {
            EditOp::Newline { .. } => "newline",
            EditOp::Substitute { .. } => "substitute",
            EditOp::Insert { .. } => "insert",
            EditOp::Delete { .. } => "delete",
        }
    }
}

/// Error type for edit application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Operation tag is not one of the recognized edit kinds.
    ///
    /// Unrepresentable with [`EditOp`] itself; raised by the script layer
    /// when a serialized operation names an unknown tag.
    InvalidOperation { tag: String },
    /// `line_index` outside `[0, line_count)`
    LineOutOfBounds {
        line_index: usize,
        line_count: usize,
    },
    /// `start`/`end` outside `[0, line_len]`, or `start > end`
    RangeOutOfBounds {
        start: usize,
        end: usize,
        line_len: usize,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidOperation { tag } => {
                write!(f, "unknown edit operation: {:?}", tag)
            }
            EditError::LineOutOfBounds {
                line_index,
                line_count,
            } => write!(
                f,
                "line index {} out of bounds (document has {} lines)",
                line_index, line_count
            ),
            EditError::RangeOutOfBounds {
                start,
                end,
                line_len,
            } => write!(
                f,
                "range {}..{} out of bounds for line of length {}",
                start, end, line_len
            ),
        }
    }
}

impl std::error::Error for EditError {}

/// Apply one edit operation to a document, returning the edited document.
///
/// Pure transition: the input document is untouched, success yields a new
/// value with only the addressed line changed.
pub fn apply(document: &Document, op: &EditOp) -> Result<Document, EditError> {
    let line = checked_line(document, op.line_index())?;

    let edited = match op {
        EditOp::Newline { .. } => {
            let mut content = line.to_string();
            content.push('\n');
            content
        }
        EditOp::Substitute {
            start,
            end,
            insert_text,
            ..
        } => replace_range(line, *start, *end, insert_text)?,
        // A zero-width substitute over [start, start)
        EditOp::Insert {
            start, insert_text, ..
        } => replace_range(line, *start, *start, insert_text)?,
        EditOp::Delete { start, end, .. } => replace_range(line, *start, *end, "")?,
    };

    tracing::debug!(
        kind = op.kind(),
        line_index = op.line_index(),
        "applied edit"
    );
    Ok(document.with_line(op.line_index(), edited))
}

/// Apply a sequence of operations in order, stopping at the first error
pub fn apply_all(document: &Document, ops: &[EditOp]) -> Result<Document, EditError> {
    let mut current = document.clone();
    for op in ops {
        current = apply(&current, op)?;
    }
    Ok(current)
}

fn checked_line(document: &Document, line_index: usize) -> Result<&str, EditError> {
    document
        .line(line_index)
        .ok_or_else(|| EditError::LineOutOfBounds {
            line_index,
            line_count: document.line_count(),
        })
}

/// Replace the character range `[start, end)` of `line` with `insert_text`,
/// validating the range first.
fn replace_range(
    line: &str,
    start: usize,
    end: usize,
    insert_text: &str,
) -> Result<String, EditError> {
    let line_len = line.chars().count();
    if start > end || end > line_len {
        return Err(EditError::RangeOutOfBounds {
            start,
            end,
            line_len,
        });
    }

    let start_byte = char_to_byte(line, start);
    let end_byte = char_to_byte(line, end);

    let mut edited = String::with_capacity(line.len() + insert_text.len());
    edited.push_str(&line[..start_byte]);
    edited.push_str(insert_text);
    edited.push_str(&line[end_byte..]);
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    #[test]
    fn test_insert_mid_line() {
        // "Line 2" is 6 chars: offset 5 sits before the final '2'
        let d = doc(&["Line 1", "Line 2", "Line 3"]);
        let out = apply(
            &d,
            &EditOp::Insert {
                line_index: 1,
                start: 5,
                insert_text: " inserted".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out.lines(), ["Line 1", "Line  inserted2", "Line 3"]);
        // input untouched
        assert_eq!(d.line(1), Some("Line 2"));
    }

    #[test]
    fn test_substitute_single_char() {
        let d = doc(&["abc", "def"]);
        let out = apply(
            &d,
            &EditOp::Substitute {
                line_index: 0,
                start: 1,
                end: 2,
                insert_text: "X".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out.lines(), ["aXc", "def"]);
    }

    #[test]
    fn test_delete_prefix() {
        let d = doc(&["abc"]);
        let out = apply(
            &d,
            &EditOp::Delete {
                line_index: 0,
                start: 0,
                end: 1,
            },
        )
        .unwrap();
        assert_eq!(out.lines(), ["bc"]);
    }

    #[test]
    fn test_newline_embeds_terminator() {
        let d = doc(&["abc", "def"]);
        let out = apply(&d, &EditOp::Newline { line_index: 0 }).unwrap();
        // line count unchanged, terminator inside the line
        assert_eq!(out.line_count(), 2);
        assert_eq!(out.line(0), Some("abc\n"));
        assert_eq!(out.to_text(), "abc\n\ndef");
    }

    #[test]
    fn test_line_index_at_line_count_fails() {
        let d = doc(&["abc"]);
        let err = apply(&d, &EditOp::Newline { line_index: 1 }).unwrap_err();
        assert_eq!(
            err,
            EditError::LineOutOfBounds {
                line_index: 1,
                line_count: 1
            }
        );
    }

    #[test]
    fn test_end_past_line_len_fails() {
        let d = doc(&["abc"]);
        let err = apply(
            &d,
            &EditOp::Delete {
                line_index: 0,
                start: 0,
                end: 4,
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::RangeOutOfBounds { end: 4, .. }));
    }

    #[test]
    fn test_start_greater_than_end_fails() {
        let d = doc(&["abc"]);
        let err = apply(
            &d,
            &EditOp::Substitute {
                line_index: 0,
                start: 2,
                end: 1,
                insert_text: String::new(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn test_insert_at_line_end_allowed() {
        let d = doc(&["abc"]);
        let out = apply(
            &d,
            &EditOp::Insert {
                line_index: 0,
                start: 3,
                insert_text: "!".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out.line(0), Some("abc!"));
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let d = doc(&["héllo"]);
        let out = apply(
            &d,
            &EditOp::Substitute {
                line_index: 0,
                start: 1,
                end: 2,
                insert_text: "e".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out.line(0), Some("hello"));
    }

    #[test]
    fn test_zero_width_delete_is_identity() {
        let d = doc(&["abc"]);
        let out = apply(
            &d,
            &EditOp::Delete {
                line_index: 0,
                start: 2,
                end: 2,
            },
        )
        .unwrap();
        assert_eq!(out, d);
    }

    #[test]
    fn test_apply_all_threads_document() {
        let d = doc(&["abc"]);
        let out = apply_all(
            &d,
            &[
                EditOp::Insert {
                    line_index: 0,
                    start: 3,
                    insert_text: "def".to_string(),
                },
                EditOp::Delete {
                    line_index: 0,
                    start: 0,
                    end: 1,
                },
            ],
        )
        .unwrap();
        assert_eq!(out.line(0), Some("bcdef"));
    }

    #[test]
    fn test_apply_all_stops_at_first_error() {
        let d = doc(&["abc"]);
        let err = apply_all(
            &d,
            &[
                EditOp::Newline { line_index: 5 },
                EditOp::Newline { line_index: 0 },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, EditError::LineOutOfBounds { .. }));
    }
}
