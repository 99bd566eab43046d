//! Command-line argument parsing
//!
//! Supports:
//! - Applying an edit script to a document
//! - Converting a document between formats
//! - Rendering a CSV export report

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use quill::convert::DocFormat;
use quill::export::ExportStatus;

/// A minimal line-oriented document editing toolkit
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A line-oriented document editing toolkit")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply an edit script to a document
    Apply {
        /// Document to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Edit script (YAML, or JSON with a .json extension)
        #[arg(short = 's', long, value_name = "SCRIPT")]
        script: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short = 'o', long, value_name = "OUT", conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Write the result back to FILE
        #[arg(short = 'i', long)]
        in_place: bool,
    },

    /// Convert a document between formats
    Convert {
        /// Document to convert
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Source format (pdf, txt, docx, md, html)
        #[arg(long, value_name = "FMT")]
        from: DocFormat,

        /// Target format (pdf, txt, docx, md, html)
        #[arg(long, value_name = "FMT")]
        to: DocFormat,

        /// Write the result here instead of stdout
        #[arg(short = 'o', long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Render an export report for a CSV file
    Export {
        /// CSV file with the rows to export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Export status (pending, processing, success, failure)
        #[arg(long, value_name = "STATUS")]
        status: ExportStatus,
    },
}
