//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the HTTP client from configuration
//! - GET requests for results pages
//! - Error classification into [`FetchError`]
//!
//! Fetching returns the raw body; parsing into a [`scraper::Html`] document is
//! a separate synchronous step so that no document is held across an `.await`.

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::Client;
use scraper::Html;
use std::time::{Duration, Instant};
use url::Url;

/// A results page as returned by the server
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Time from sending the request to having the full body
    pub elapsed: Duration,
    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Parses the body into a queryable document
    ///
    /// HTML parsing is error-tolerant: malformed markup still yields a
    /// document, in which the page selectors simply match nothing.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Builds an HTTP client with proper configuration
///
/// No timeout is set unless `request_timeout_secs` is configured.
///
/// # Example
///
/// ```no_run
/// use job_harvest::config::HttpConfig;
/// use job_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a single results page
///
/// # Behavior
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx / 3xx | `Ok(FetchedPage)` |
/// | HTTP >= 400 | `Ok(FetchedPage)`, logged as a warning |
/// | Timeout | `Err(FetchError::Timeout)` |
/// | Connection failure | `Err(FetchError::Connect)` |
/// | Other transport error | `Err(FetchError::Transport)` |
/// | Body read failure | `Err(FetchError::Body)` |
///
/// Errors are returned, never raised; the caller decides whether a failure
/// is fatal.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, FetchError> {
    let start = Instant::now();

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, &e))?;

    let status = response.status();

    if status.as_u16() >= 400 {
        tracing::warn!(url = %url, status = status.as_u16(), "HTTP error status, parsing body anyway");
    }

    let body = response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let elapsed = start.elapsed();
    tracing::info!(
        url = %url,
        status = status.as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        bytes = body.len(),
        "Fetched page"
    );

    Ok(FetchedPage {
        status: status.as_u16(),
        elapsed,
        body,
    })
}

/// Maps a reqwest error onto the fetch failure taxonomy
fn classify_error(url: &Url, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
