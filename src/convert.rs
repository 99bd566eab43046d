//! Pairwise document format conversion
//!
//! Only a few conversions are meaningful; everything else is rejected with
//! [`ConvertError::Unsupported`]. Markdown rendering is real (pulldown-cmark,
//! fragment output); the PDF and DOCX "formats" are placeholders that exist
//! so the full tag set round-trips through the CLI.

use std::fmt;
use std::str::FromStr;

use pulldown_cmark::{html, Options, Parser};

/// Recognized document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Pdf,
    Txt,
    Docx,
    Md,
    Html,
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocFormat::Pdf => "pdf",
            DocFormat::Txt => "txt",
            DocFormat::Docx => "docx",
            DocFormat::Md => "md",
            DocFormat::Html => "html",
        };
        f.write_str(name)
    }
}

impl FromStr for DocFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocFormat::Pdf),
            "txt" => Ok(DocFormat::Txt),
            "docx" => Ok(DocFormat::Docx),
            "md" | "markdown" => Ok(DocFormat::Md),
            "html" => Ok(DocFormat::Html),
            other => Err(format!(
                "unknown format {:?} (expected pdf, txt, docx, md, or html)",
                other
            )),
        }
    }
}

/// Error type for format conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No conversion is defined between this pair of formats
    Unsupported { from: DocFormat, to: DocFormat },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Unsupported { from, to } => {
                write!(f, "no conversion from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert `content` between two document formats
pub fn convert(content: &str, from: DocFormat, to: DocFormat) -> Result<String, ConvertError> {
    match (from, to) {
        (DocFormat::Md, DocFormat::Html) => Ok(markdown_to_html(content)),
        (DocFormat::Txt, DocFormat::Pdf) => Ok(format!("[PDF] {} [PDF]", content)),
        (DocFormat::Html, DocFormat::Md) => Ok(html_to_markdown(content)),
        (from, to) => Err(ConvertError::Unsupported { from, to }),
    }
}

/// Render Markdown to an HTML fragment
fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Strip top-level heading tags back to a `#` heading.
///
/// Deliberately shallow: only `<h1>` pairs are handled, everything else
/// passes through untouched.
fn html_to_markdown(content: &str) -> String {
    let stripped = content.replace("<h1>", "").replace("</h1>", "");
    format!("# {}", stripped.trim())
}
