use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use quill::config::QuillConfig;
use quill::convert::{convert, DocFormat};
use quill::export::{parse_rows, render_export, ExportPayload, ExportStatus};
use quill::parse::ParseOutcome;
use quill::script::EditScript;

mod cli;

use cli::{CliArgs, Command};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = QuillConfig::load();
    let _log_guard = quill::tracing::init(&config.log_filter);

    match args.command {
        Command::Apply {
            file,
            script,
            output,
            in_place,
        } => {
            let destination = if in_place {
                Some(file.clone())
            } else {
                output
            };
            run_apply(&file, &script, destination.as_deref(), &config)
        }
        Command::Convert {
            file,
            from,
            to,
            output,
        } => run_convert(&file, from, to, output.as_deref()),
        Command::Export { file, status } => run_export(&file, status),
    }
}

/// Load a document, apply the edit script, write the result
fn run_apply(
    file: &Path,
    script_path: &Path,
    destination: Option<&Path>,
    config: &QuillConfig,
) -> Result<()> {
    let outcome = ParseOutcome::load(file);
    let Some(document) = outcome.document() else {
        bail!("{}", outcome.describe());
    };

    let script = EditScript::from_path(script_path)
        .with_context(|| format!("invalid edit script {}", script_path.display()))?;
    tracing::info!(
        file = %file.display(),
        ops = script.ops().len(),
        "applying edit script"
    );

    let edited = script
        .apply(&document)
        .with_context(|| format!("failed to edit {}", file.display()))?;

    write_result(&edited.to_text_with_separator(&config.line_separator), destination)
}

/// Convert a document between formats
fn run_convert(file: &Path, from: DocFormat, to: DocFormat, output: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    tracing::info!(file = %file.display(), %from, %to, "converting document");
    let converted = convert(&content, from, to)?;

    write_result(&converted, output)
}

/// Print an export report for the rows in a CSV file
fn run_export(file: &Path, status: ExportStatus) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let rows = parse_rows(&content)?;

    let report = render_export(status, rows)?;
    println!("{}", report.message);
    match report.payload {
        ExportPayload::Rows(rows) => {
            for row in rows {
                println!("{:?}", row);
            }
        }
        ExportPayload::Csv(text) => println!("{}", text),
    }
    Ok(())
}

/// Write to the destination path, or stdout when there is none
fn write_result(text: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote result");
        }
        None => println!("{}", text),
    }
    Ok(())
}
