//! Markdown report generation
//!
//! Renders a crawl report as a human-readable document: run information,
//! per-page statistics and the job table.

use crate::crawler::{CrawlReport, PageOutcome, PaginationMarker};
use chrono::{DateTime, Utc};

/// Formats a crawl report as markdown
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `generated_at` - Timestamp written into the header
pub fn format_markdown_report(report: &CrawlReport, generated_at: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str("# Job-Harvest Crawl Report\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Query**: {}\n", report.query.term));
    if !report.query.filter_codes.is_empty() {
        md.push_str(&format!("- **Filter Codes**: {:?}\n", report.query.filter_codes));
    }
    md.push_str(&format!("- **Intern**: {}\n", report.query.is_intern));
    md.push_str(&format!("- **Search URL**: {}\n", report.search_url));
    md.push_str(&format!("- **Generated**: {}\n", generated_at.to_rfc3339()));
    md.push_str(&format!("- **Pages**: {}\n", describe_pagination(&report.pagination)));
    md.push_str(&format!("- **Jobs**: {}\n", report.jobs.len()));

    let skipped = report.skipped_pages();
    if skipped.is_empty() {
        md.push_str("- **Skipped Pages**: none\n\n");
    } else {
        md.push_str(&format!("- **Skipped Pages**: {:?}\n\n", skipped));
    }

    if !report.pages.is_empty() {
        md.push_str("## Pages\n\n");
        md.push_str("| Page | HTTP | Time (ms) | Matched | Accepted | Added | Status |\n");
        md.push_str("|------|------|-----------|---------|----------|-------|--------|\n");
        for page in &report.pages {
            let status = match &page.outcome {
                PageOutcome::Extracted => "ok".to_string(),
                PageOutcome::FetchFailed(error) => format!("failed: {}", escape_cell(&error.to_string())),
            };
            let http = page
                .status
                .map(|code| code.to_string())
                .unwrap_or_else(|| "-".to_string());
            let time = page
                .elapsed
                .map(|elapsed| elapsed.as_millis().to_string())
                .unwrap_or_else(|| "-".to_string());
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                page.page_number,
                http,
                time,
                page.matched_count,
                page.accepted_count,
                page.added_count,
                status
            ));
        }
        md.push('\n');
    }

    md.push_str("## Jobs\n\n");
    if report.jobs.is_empty() {
        md.push_str("No jobs found.\n");
    } else {
        md.push_str("| # | Title | Link |\n");
        md.push_str("|---|-------|------|\n");
        for (i, job) in report.jobs.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                i + 1,
                escape_cell(&job.title),
                escape_cell(&job.link)
            ));
        }
    }

    md
}

fn describe_pagination(marker: &PaginationMarker) -> String {
    match marker {
        PaginationMarker::Found(count) => count.to_string(),
        PaginationMarker::Missing => "0 (pagination marker missing)".to_string(),
        PaginationMarker::Malformed(raw) => format!("0 (unreadable pagination marker {:?})", raw),
    }
}

/// Keeps a value inside a single table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\n', '\r'], " ")
}
