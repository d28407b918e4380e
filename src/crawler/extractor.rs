//! Job card extraction
//!
//! Every element matching the card selector yields one [`JobRecord`]:
//! - title: text of the first nested heading, whitespace-trimmed
//! - link: raw `href` of the first nested anchor, empty if missing
//!
//! Records with an empty link are kept here so the card count stays honest;
//! they are rejected when merged into the crawl result.

use crate::crawler::selectors::SiteSelectors;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// One job listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub link: String,
}

impl JobRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// A record is usable as a dedup key only with a non-empty link
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// All cards found on one results page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    pub cards: Vec<JobRecord>,
}

impl PageExtraction {
    /// Number of elements that matched the card selector
    pub fn matched(&self) -> usize {
        self.cards.len()
    }

    /// Cards that carry a link
    pub fn accepted(&self) -> impl Iterator<Item = &JobRecord> {
        self.cards.iter().filter(|card| card.has_link())
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }
}

/// Extracts all job cards from a results page
pub fn extract_jobs(document: &Html, selectors: &SiteSelectors) -> PageExtraction {
    let cards: Vec<JobRecord> = document
        .select(&selectors.job_card)
        .map(|card| extract_card(card, selectors))
        .collect();

    let extraction = PageExtraction { cards };
    let dropped = extraction.matched() - extraction.accepted_count();
    if dropped > 0 {
        tracing::debug!(dropped, "Cards without a link");
    }

    extraction
}

fn extract_card(card: ElementRef<'_>, selectors: &SiteSelectors) -> JobRecord {
    let title = card
        .select(&selectors.job_title)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let link = card
        .select(&selectors.job_link)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    JobRecord { title, link }
}
