//! Document load outcomes as a sum type
//!
//! Loading a document either yields its text or a description of why it
//! could not be read; callers match on the outcome instead of unwinding.

use std::path::Path;

use crate::document::Document;

/// Result of attempting to load a named document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The document was read and parsed into lines
    Parsed { name: String, text: String },
    /// The document could not be read
    Failed { name: String, error: String },
}

impl ParseOutcome {
    /// Load a document from a file path, never panicking: IO errors become
    /// the `Failed` case.
    pub fn load(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(name = %name, bytes = text.len(), "loaded document");
                ParseOutcome::Parsed { name, text }
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "failed to load document");
                ParseOutcome::Failed {
                    name,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Human-readable one-liner for either case
    pub fn describe(&self) -> String {
        match self {
            ParseOutcome::Parsed { name, text } => {
                format!("Document '{}' parsed successfully: {}", name, text)
            }
            ParseOutcome::Failed { name, error } => {
                format!("Error parsing '{}': {}", name, error)
            }
        }
    }

    /// The parsed document, None for the failed case
    pub fn document(&self) -> Option<Document> {
        match self {
            ParseOutcome::Parsed { text, .. } => Some(Document::from_text(text)),
            ParseOutcome::Failed { .. } => None,
        }
    }
}
