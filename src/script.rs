//! Edit scripts - serialized operation lists applied in order
//!
//! A script is a YAML or JSON list of tagged operation maps:
//!
//! ```yaml
//! - kind: insert
//!   line_index: 1
//!   start: 5
//!   insert_text: " inserted"
//! - kind: delete
//!   line_index: 0
//!   start: 0
//!   end: 1
//! ```
//!
//! Operations are parsed in a raw form first so that an unknown `kind` tag
//! surfaces as [`EditError::InvalidOperation`] with the offending tag, rather
//! than an opaque deserialization failure.

use std::path::Path;

use serde::Deserialize;

use crate::document::Document;
use crate::edit::{apply_all, EditError, EditOp};

/// An ordered list of edit operations parsed from a script file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

/// Error type for script loading and application
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read
    Io(std::io::Error),
    /// The script is not well-formed YAML/JSON
    Parse(String),
    /// A recognized operation is missing a required field
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    /// An operation failed to parse or apply
    Edit(EditError),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read script: {}", e),
            ScriptError::Parse(msg) => write!(f, "malformed edit script: {}", msg),
            ScriptError::MissingField { kind, field } => {
                write!(f, "{} operation is missing required field {:?}", kind, field)
            }
            ScriptError::Edit(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Edit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EditError> for ScriptError {
    fn from(e: EditError) -> Self {
        ScriptError::Edit(e)
    }
}

/// One operation as it appears on disk, tag not yet validated.
///
/// Every field except `kind` is optional here: the tag is checked first, so
/// an unknown tag reports `InvalidOperation` even when the op carries no
/// other fields at all.
#[derive(Debug, Deserialize)]
struct RawOp {
    kind: String,
    #[serde(default)]
    line_index: Option<usize>,
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
    #[serde(default)]
    insert_text: Option<String>,
}

impl RawOp {
    fn into_op(self) -> Result<EditOp, ScriptError> {
        match self.kind.as_str() {
            "newline" => Ok(EditOp::Newline {
                line_index: require(self.line_index, "newline", "line_index")?,
            }),
            "substitute" => Ok(EditOp::Substitute {
                line_index: require(self.line_index, "substitute", "line_index")?,
                start: require(self.start, "substitute", "start")?,
                end: require(self.end, "substitute", "end")?,
                insert_text: require(self.insert_text, "substitute", "insert_text")?,
            }),
            "insert" => Ok(EditOp::Insert {
                line_index: require(self.line_index, "insert", "line_index")?,
                start: require(self.start, "insert", "start")?,
                insert_text: require(self.insert_text, "insert", "insert_text")?,
            }),
            "delete" => Ok(EditOp::Delete {
                line_index: require(self.line_index, "delete", "line_index")?,
                start: require(self.start, "delete", "start")?,
                end: require(self.end, "delete", "end")?,
            }),
            _ => Err(EditError::InvalidOperation { tag: self.kind }.into()),
        }
    }
}

fn require<T>(value: Option<T>, kind: &'static str, field: &'static str) -> Result<T, ScriptError> {
    value.ok_or(ScriptError::MissingField { kind, field })
}

impl EditScript {
    /// Build a script from already-typed operations
    pub fn from_ops(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// Parse a script from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, ScriptError> {
        let raw: Vec<RawOp> =
            serde_yaml::from_str(text).map_err(|e| ScriptError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse a script from JSON text
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        let raw: Vec<RawOp> =
            serde_json::from_str(text).map_err(|e| ScriptError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Load a script from a file, picking the format by extension
    /// (`.json` is JSON, anything else is YAML)
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(ScriptError::Io)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    fn from_raw(raw: Vec<RawOp>) -> Result<Self, ScriptError> {
        let ops = raw
            .into_iter()
            .map(RawOp::into_op)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(op_count = ops.len(), "parsed edit script");
        Ok(Self { ops })
    }

    /// Operations in application order
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply every operation in order, threading the document through.
    ///
    /// First failure aborts; the caller's document is unchanged either way.
    pub fn apply(&self, document: &Document) -> Result<Document, EditError> {
        apply_all(document, &self.ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_script_parses_all_kinds() {
        let script = EditScript::from_yaml(
            r#"
- kind: newline
  line_index: 0
- kind: substitute
  line_index: 0
  start: 0
  end: 1
  insert_text: "X"
- kind: insert
  line_index: 1
  start: 0
  insert_text: ">> "
- kind: delete
  line_index: 1
  start: 2
  end: 3
"#,
        )
        .unwrap();
        assert_eq!(script.ops().len(), 4);
        assert_eq!(script.ops()[0], EditOp::Newline { line_index: 0 });
    }

    #[test]
    fn test_unknown_kind_is_invalid_operation() {
        let err = EditScript::from_yaml("- kind: uppercase\n  line_index: 0\n").unwrap_err();
        match err {
            ScriptError::Edit(EditError::InvalidOperation { tag }) => {
                assert_eq!(tag, "uppercase");
            }
            other => panic!("expected InvalidOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_with_no_other_fields() {
        // the tag check must win over per-kind field requirements
        let err = EditScript::from_yaml("- kind: uppercase\n").unwrap_err();
        match err {
            ScriptError::Edit(EditError::InvalidOperation { tag }) => {
                assert_eq!(tag, "uppercase");
            }
            other => panic!("expected InvalidOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_line_index_on_known_kind() {
        let err = EditScript::from_yaml("- kind: newline\n").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingField {
                kind: "newline",
                field: "line_index"
            }
        ));
    }

    #[test]
    fn test_missing_field_reported_by_name() {
        let err =
            EditScript::from_yaml("- kind: insert\n  line_index: 0\n  start: 2\n").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingField {
                kind: "insert",
                field: "insert_text"
            }
        ));
    }

    #[test]
    fn test_json_script() {
        let script =
            EditScript::from_json(r#"[{"kind": "delete", "line_index": 0, "start": 0, "end": 1}]"#)
                .unwrap();
        assert_eq!(
            script.ops()[0],
            EditOp::Delete {
                line_index: 0,
                start: 0,
                end: 1
            }
        );
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = EditScript::from_yaml(": not a list").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_apply_threads_in_order() {
        let doc = Document::from_text("abc\ndef");
        let script = EditScript::from_yaml(
            r#"
- kind: delete
  line_index: 0
  start: 0
  end: 1
- kind: insert
  line_index: 0
  start: 0
  insert_text: "z"
"#,
        )
        .unwrap();
        let out = script.apply(&doc).unwrap();
        assert_eq!(out.lines(), ["zbc", "def"]);
        assert_eq!(doc.line(0), Some("abc"));
    }
}
