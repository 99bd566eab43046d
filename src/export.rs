//! CSV export status reporting
//!
//! An export moves through a small set of states; each state renders to a
//! user-facing message plus a payload (the raw rows, or their RFC 4180
//! serialization, depending on how far along the export is).

use std::fmt;
use std::str::FromStr;

/// Stage an export is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Pending,
    Processing,
    Success,
    Failure,
}

impl FromStr for ExportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ExportStatus::Pending),
            "processing" => Ok(ExportStatus::Processing),
            "success" => Ok(ExportStatus::Success),
            "failure" => Ok(ExportStatus::Failure),
            other => Err(format!("unknown export status {:?}", other)),
        }
    }
}

/// Payload carried by an export report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    /// Rows as parsed, untouched
    Rows(Vec<Vec<String>>),
    /// Rows serialized to CSV text
    Csv(String),
}

/// A status message plus the payload appropriate for that status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub message: &'static str,
    pub payload: ExportPayload,
}

/// Error type for CSV parsing and serialization
#[derive(Debug)]
pub struct ExportError {
    pub message: String,
    pub line: Option<usize>,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV error at line {}: {}", line, self.message),
            None => write!(f, "CSV error: {}", self.message),
        }
    }
}

impl std::error::Error for ExportError {}

/// Render the report for an export in the given status.
///
/// `Pending` and `Success` pass the rows through; `Processing` and `Failure`
/// serialize them (the failure report carries the serialized data so a retry
/// can resubmit it as-is).
pub fn render_export(
    status: ExportStatus,
    rows: Vec<Vec<String>>,
) -> Result<ExportReport, ExportError> {
    let report = match status {
        ExportStatus::Pending => ExportReport {
            message: "Pending...",
            payload: ExportPayload::Rows(rows),
        },
        ExportStatus::Processing => ExportReport {
            message: "Processing...",
            payload: ExportPayload::Csv(rows_to_csv(&rows)?),
        },
        ExportStatus::Success => ExportReport {
            message: "Success!",
            payload: ExportPayload::Rows(rows),
        },
        ExportStatus::Failure => ExportReport {
            message: "Unknown error, retrying...",
            payload: ExportPayload::Csv(rows_to_csv(&rows)?),
        },
    };
    Ok(report)
}

/// Parse CSV content into rows.
///
/// Flexible mode: ragged rows are allowed, quoting per RFC 4180.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => rows.push(record.iter().map(|s| s.to_string()).collect()),
            Err(e) => {
                return Err(ExportError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                })
            }
        }
    }
    Ok(rows)
}

/// Serialize rows to CSV text, no trailing newline
pub fn rows_to_csv(rows: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row).map_err(|e| ExportError {
            message: e.to_string(),
            line: None,
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError {
        message: e.to_string(),
        line: None,
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| ExportError {
        message: e.to_string(),
        line: None,
    })?;
    while text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
