//! JSON report output.
//!
//! The report is a pretty-printed JSON array with one entry per analyzed URL. Each
//! entry is the full `AnalysisResult` plus its summary ratings under `summary`.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::{AnalysisResult, Summary};

#[derive(Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    summary: Summary,
}

/// Renders results as a pretty-printed JSON array.
pub fn render_json(results: &[AnalysisResult]) -> Result<String> {
    let entries: Vec<ReportEntry<'_>> = results
        .iter()
        .map(|result| ReportEntry {
            result,
            summary: Summary::of(result),
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize analysis results")
}

/// Writes the JSON report to `output`, or to stdout when `output` is `None`.
///
/// Returns the number of results written.
pub fn write_json_report(results: &[AnalysisResult], output: Option<&Path>) -> Result<usize> {
    let rendered = render_json(results)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?),
        None => Box::new(io::stdout().lock()),
    };

    writeln!(writer, "{rendered}").context("Failed to write JSON report")?;
    writer.flush().context("Failed to flush JSON report")?;
    Ok(results.len())
}
