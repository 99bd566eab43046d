//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::{Document, EditOp};

/// Build a document from a slice of lines
pub fn doc(lines: &[&str]) -> Document {
    Document::from_lines(lines.iter().copied())
}

/// Lines of a document as owned strings, for assert_eq against slices
pub fn lines(document: &Document) -> Vec<String> {
    document.lines().to_vec()
}

/// Shorthand constructors for operations
pub fn substitute(line_index: usize, start: usize, end: usize, insert_text: &str) -> EditOp {
    EditOp::Substitute {
        line_index,
        start,
        end,
        insert_text: insert_text.to_string(),
    }
}

pub fn insert(line_index: usize, start: usize, insert_text: &str) -> EditOp {
    EditOp::Insert {
        line_index,
        start,
        insert_text: insert_text.to_string(),
    }
}

pub fn delete(line_index: usize, start: usize, end: usize) -> EditOp {
    EditOp::Delete {
        line_index,
        start,
        end,
    }
}
