//! Crawl orchestration
//!
//! This module contains the main crawl loop:
//! - Building the canonical search URL and fetching page 1
//! - Reading the page count once, from page 1
//! - Fetching, extracting and merging every page in ascending order
//! - Absorbing failures of later pages

use crate::config::{Config, SiteConfig};
use crate::crawler::dedup::DedupIndex;
use crate::crawler::extractor::{extract_jobs, JobRecord, PageExtraction};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchedPage};
use crate::crawler::pagination::inspect_pagination;
use crate::crawler::report::{CrawlReport, PageOutcome, PageResult};
use crate::crawler::selectors::SiteSelectors;
use crate::url::{build_search_url, CrawlTarget, SearchQuery};
use crate::HarvestError;
use reqwest::Client;
use std::time::Instant;

/// Crawls the search results of the configured site
///
/// Holds only immutable, shareable state (the HTTP client and the site
/// description). Everything a crawl accumulates lives inside [`Harvester::crawl`].
#[derive(Debug, Clone)]
pub struct Harvester {
    client: Client,
    site: SiteConfig,
    selectors: SiteSelectors,
}

impl Harvester {
    /// Creates a harvester with an HTTP client built from the config
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to crawl
    /// * `Err(HarvestError)` - Invalid selectors or HTTP client construction failed
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.http)?;
        Self::with_client(client, config)
    }

    /// Creates a harvester around an existing HTTP client
    pub fn with_client(client: Client, config: &Config) -> Result<Self, HarvestError> {
        let selectors = SiteSelectors::from_config(&config.selectors)?;
        Ok(Self {
            client,
            site: config.site.clone(),
            selectors,
        })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Runs one complete crawl for a query
    ///
    /// # Algorithm
    ///
    /// 1. Resolve filter codes (`is_intern` implies the intern code when no
    ///    explicit codes are given)
    /// 2. Build and fetch the canonical search URL; failure here is fatal
    /// 3. Read the page count from page 1; zero ends the crawl with no jobs
    /// 4. For pages `1..=count` in order: reuse page 1's extraction, fetch
    ///    the others, skip pages that fail, merge unseen links
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Crawl finished, possibly with skipped pages
    /// * `Err(HarvestError::StartPage)` - Page 1 could not be fetched
    /// * `Err(HarvestError::Url)` - The search URL could not be built
    pub async fn crawl(&self, query: &SearchQuery) -> Result<CrawlReport, HarvestError> {
        let start_time = Instant::now();
        let filter_codes = query.effective_filter_codes(self.site.intern_filter_code);
        let search_url = build_search_url(&self.site, &query.term, &filter_codes)?;

        tracing::info!(
            term = %query.term,
            is_intern = query.is_intern,
            filter_codes = ?filter_codes,
            url = %search_url,
            "Starting crawl"
        );

        let first = match fetch_page(&self.client, &search_url).await {
            Ok(page) => page,
            Err(source) => {
                tracing::error!(url = %search_url, error = %source, "Failed to fetch start page");
                return Err(HarvestError::StartPage {
                    url: search_url.to_string(),
                    source,
                });
            }
        };

        let (pagination, first_extraction) = {
            let document = first.document();
            (
                inspect_pagination(&document, &self.selectors.max_page),
                extract_jobs(&document, &self.selectors),
            )
        };
        let page_count = pagination.page_count();

        // The count comes from the remote page, so nothing is sized by it up front
        let mut report = CrawlReport {
            query: query.clone(),
            search_url: search_url.to_string(),
            pagination,
            pages: Vec::new(),
            jobs: Vec::new(),
        };

        if page_count == 0 {
            tracing::info!(url = %search_url, marker = ?report.pagination, "No result pages");
            return Ok(report);
        }

        let mut index = DedupIndex::new();
        let mut cached_first = Some(first_extraction);

        for page in 1..=page_count {
            let target = CrawlTarget::new(search_url.as_str(), page, &self.site.page_param)?;

            let (extraction, status, elapsed) = if page == 1 {
                (cached_first.take().unwrap_or_default(), first.status, first.elapsed)
            } else {
                tracing::info!(page, url = %target.url, "Fetching page");
                match fetch_page(&self.client, &target.url).await {
                    Ok(fetched) => (self.extract(&fetched), fetched.status, fetched.elapsed),
                    Err(error) => {
                        tracing::warn!(page, url = %target.url, error = %error, "Skipping page");
                        report.pages.push(PageResult {
                            page_number: page,
                            url: target.url.to_string(),
                            status: None,
                            elapsed: None,
                            matched_count: 0,
                            accepted_count: 0,
                            added_count: 0,
                            outcome: PageOutcome::FetchFailed(error),
                        });
                        continue;
                    }
                }
            };

            if extraction.matched() == 0 {
                tracing::warn!(page, url = %target.url, "Selectors matched 0 job cards");
            }

            let added = merge_page(&mut index, &mut report.jobs, &extraction);

            tracing::info!(
                page,
                matched = extraction.matched(),
                accepted = extraction.accepted_count(),
                added,
                total = report.jobs.len(),
                "Page processed"
            );

            report.pages.push(PageResult {
                page_number: page,
                url: target.url.to_string(),
                status: Some(status),
                elapsed: Some(elapsed),
                matched_count: extraction.matched(),
                accepted_count: extraction.accepted_count(),
                added_count: added,
                outcome: PageOutcome::Extracted,
            });
        }

        tracing::info!(
            pages = page_count,
            skipped = ?report.skipped_pages(),
            jobs = report.jobs.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Crawl finished"
        );

        Ok(report)
    }

    fn extract(&self, fetched: &FetchedPage) -> PageExtraction {
        let document = fetched.document();
        extract_jobs(&document, &self.selectors)
    }
}

/// Appends the page's unseen, linked records to `jobs`
///
/// Returns the number of records added. The first occurrence of a link wins.
pub fn merge_page(
    index: &mut DedupIndex,
    jobs: &mut Vec<JobRecord>,
    extraction: &PageExtraction,
) -> usize {
    let mut added = 0;
    for record in extraction.accepted() {
        if index.insert(&record.link) {
            jobs.push(record.clone());
            added += 1;
        }
    }
    added
}
