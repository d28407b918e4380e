//! Reads the total page count from the first results page

use scraper::{Html, Selector};

/// What the pagination marker said
///
/// Both `Missing` and `Malformed` count as zero pages: the crawl stops
/// without an error, but callers can still tell it apart from a real zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationMarker {
    /// The marker was present and held a number
    Found(u32),
    /// No element matched the marker selector
    Missing,
    /// The marker text was not a non-negative integer
    Malformed(String),
}

impl PaginationMarker {
    /// Number of pages to crawl
    pub fn page_count(&self) -> u32 {
        match self {
            Self::Found(count) => *count,
            Self::Missing | Self::Malformed(_) => 0,
        }
    }
}

/// Locates the max-page marker and parses it
///
/// Only the first matching element is read; its text is trimmed before parsing.
pub fn inspect_pagination(document: &Html, marker: &Selector) -> PaginationMarker {
    let Some(element) = document.select(marker).next() else {
        tracing::warn!("Pagination marker not found, treating as zero pages");
        return PaginationMarker::Missing;
    };

    let raw = element.text().collect::<String>();
    let result = match raw.trim().parse::<u32>() {
        Ok(count) => PaginationMarker::Found(count),
        Err(_) => PaginationMarker::Malformed(raw.clone()),
    };

    tracing::info!(raw = %raw, parsed = result.page_count(), "Pagination");
    result
}

/// Convenience wrapper returning only the page count
pub fn page_count(document: &Html, marker: &Selector) -> u32 {
    inspect_pagination(document, marker).page_count()
}
