//! Outcome types of a crawl

use crate::crawler::extractor::JobRecord;
use crate::crawler::pagination::PaginationMarker;
use crate::url::SearchQuery;
use crate::FetchError;
use std::time::Duration;

/// What happened to one results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was fetched and its cards extracted
    Extracted,
    /// The page could not be fetched and contributed nothing
    FetchFailed(FetchError),
}

/// Per-page statistics, kept for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub page_number: u32,
    pub url: String,
    /// HTTP status of the response; `None` when the fetch failed
    pub status: Option<u16>,
    /// Time to fetch the full body; `None` when the fetch failed
    pub elapsed: Option<Duration>,
    /// Elements matching the card selector
    pub matched_count: usize,
    /// Matched cards that carried a link
    pub accepted_count: usize,
    /// Accepted cards not seen on an earlier page
    pub added_count: usize,
    pub outcome: PageOutcome,
}

impl PageResult {
    pub fn fetch_failed(&self) -> bool {
        matches!(self.outcome, PageOutcome::FetchFailed(_))
    }
}

/// Result of a crawl that got past the first page
///
/// Failed later pages do not make the crawl fail; they are listed in
/// `pages` and reported by [`CrawlReport::skipped_pages`].
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub query: SearchQuery,
    /// Canonical (page 1) search URL
    pub search_url: String,
    /// Pagination marker as read from page 1
    pub pagination: PaginationMarker,
    /// One entry per crawled page, in ascending page order
    pub pages: Vec<PageResult>,
    /// Unique jobs in first-discovery order
    pub jobs: Vec<JobRecord>,
}

impl CrawlReport {
    pub fn page_count(&self) -> u32 {
        self.pagination.page_count()
    }

    /// Page numbers whose fetch failed
    pub fn skipped_pages(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|page| page.fetch_failed())
            .map(|page| page.page_number)
            .collect()
    }

    /// True when every discovered page contributed
    pub fn is_complete(&self) -> bool {
        self.pages.iter().all(|page| !page.fetch_failed())
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn into_jobs(self) -> Vec<JobRecord> {
        self.jobs
    }
}
