//! Output module for exporting crawl results
//!
//! This module handles:
//! - JSON arrays of `{title, link}` (the same shape the HTTP service returns)
//! - CSV with a `title,link` header
//! - Markdown reports with per-page statistics

mod markdown;

pub use markdown::format_markdown_report;

use crate::crawler::{CrawlReport, JobRecord};
use crate::HarvestError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

/// Writes jobs as a pretty-printed JSON array
pub fn write_json<W: Write>(jobs: &[JobRecord], mut writer: W) -> Result<(), HarvestError> {
    serde_json::to_writer_pretty(&mut writer, jobs)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes jobs as CSV with a `title,link` header
///
/// Fields containing commas, quotes or line breaks are quoted, with embedded
/// quotes doubled.
pub fn write_csv<W: Write>(jobs: &[JobRecord], mut writer: W) -> Result<(), HarvestError> {
    writer.write_all(b"title,link\n")?;
    for job in jobs {
        writeln!(writer, "{},{}", csv_field(&job.title), csv_field(&job.link))?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes a report to `writer` in the given format
pub fn write_report<W: Write>(
    report: &CrawlReport,
    format: ExportFormat,
    mut writer: W,
) -> Result<(), HarvestError> {
    match format {
        ExportFormat::Json => write_json(&report.jobs, writer),
        ExportFormat::Csv => write_csv(&report.jobs, writer),
        ExportFormat::Markdown => {
            let md = format_markdown_report(report, chrono::Utc::now());
            writer.write_all(md.as_bytes())?;
            Ok(())
        }
    }
}

/// Writes a report to a file, replacing any existing content
pub fn export_report(
    report: &CrawlReport,
    output_path: &Path,
    format: ExportFormat,
) -> Result<(), HarvestError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_report(report, format, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        path = %output_path.display(),
        format = ?format,
        jobs = report.jobs.len(),
        "Exported crawl report"
    );
    Ok(())
}
