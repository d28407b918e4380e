//! Crawler module for results page fetching and processing
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching with error classification
//! - Pagination marker inspection
//! - Job card extraction
//! - Link deduplication across pages
//! - Overall crawl coordination

mod coordinator;
mod dedup;
mod extractor;
mod fetcher;
mod pagination;
mod report;
mod selectors;

pub use coordinator::{merge_page, Harvester};
pub use dedup::DedupIndex;
pub use extractor::{extract_jobs, JobRecord, PageExtraction};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use pagination::{inspect_pagination, page_count, PaginationMarker};
pub use report::{CrawlReport, PageOutcome, PageResult};
pub use selectors::SiteSelectors;

use crate::config::Config;
use crate::url::SearchQuery;
use crate::HarvestError;

/// Runs a single crawl with a freshly built harvester
///
/// Convenient for one-shot use; long-running callers should keep a
/// [`Harvester`] around so the HTTP client's connections are reused.
pub async fn crawl(config: &Config, query: &SearchQuery) -> Result<CrawlReport, HarvestError> {
    Harvester::new(config)?.crawl(query).await
}
