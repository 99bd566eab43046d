//! quill - a minimal line-oriented document editing toolkit
//!
//! The core is a pure edit dispatcher: a [`Document`] is an ordered sequence
//! of text lines, an [`EditOp`] is one tagged edit against a single line, and
//! [`edit::apply`] is a pure transition from one document value to the next.
//! Around that sit edit scripts (YAML/JSON operation lists), document format
//! conversion, and CSV export reporting.

pub mod config;
pub mod config_paths;
pub mod convert;
pub mod document;
pub mod edit;
pub mod export;
pub mod parse;
pub mod script;
pub mod tracing;

// Re-export commonly used types
pub use config::QuillConfig;
pub use document::Document;
pub use edit::{apply, EditError, EditOp};
pub use script::EditScript;
