//! Job-Harvest: a paginated job-listing harvester
//!
//! This crate crawls the paginated search results of a single job board,
//! extracts `(title, link)` records from every results page, deduplicates them
//! by link and returns them in discovery order. The crawl is exposed both as a
//! library call ([`crawler::Harvester::crawl`]) and as a small JSON HTTP service.

pub mod config;
pub mod crawler;
pub mod output;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Job-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    /// The first results page could not be fetched; nothing can be crawled
    #[error("Failed to fetch start page {url}: {source}")]
    StartPage { url: String, source: FetchError },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL cannot carry path segments: {0}")]
    CannotBeABase(String),

    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),
}

/// Failure to obtain a document for a single results page
///
/// Only fatal for the first page; later pages that fail are skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Transport { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Result type alias for Job-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Harvester, JobRecord, PageOutcome, PageResult};
pub use crate::url::{build_page_url, build_search_url, SearchQuery};
