use crate::url::set_query_param;
use crate::UrlError;
use url::Url;

/// A results page to crawl: the page number and its absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub page: u32,
    pub url: Url,
}

impl CrawlTarget {
    /// Derives the target for `page` of the search at `canonical_url`
    pub fn new(canonical_url: &str, page: u32, page_param: &str) -> Result<Self, UrlError> {
        let url = build_page_url(canonical_url, page, page_param)?;
        Ok(Self { page, url })
    }
}

/// Derives the URL of a given results page from the canonical search URL
///
/// # Rules
///
/// - Page 1 never carries the pagination parameter; any present one is removed.
///   If none is present the canonical URL is returned exactly as given.
/// - Page N > 1 sets the pagination parameter to N, overwriting a prior value.
/// - All other query parameters keep their order and values.
/// - Page 0 does not exist and is rejected.
///
/// Applying the function twice with the same page yields the same URL.
///
/// # Examples
///
/// ```
/// use job_harvest::url::build_page_url;
///
/// let url = build_page_url("https://example.com/praca/rust;kw?et=1", 3, "pn").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/praca/rust;kw?et=1&pn=3");
///
/// let first = build_page_url(url.as_str(), 1, "pn").unwrap();
/// assert_eq!(first.as_str(), "https://example.com/praca/rust;kw?et=1");
/// ```
pub fn build_page_url(canonical_url: &str, page: u32, page_param: &str) -> Result<Url, UrlError> {
    if page == 0 {
        return Err(UrlError::InvalidPage(page));
    }

    let mut url = Url::parse(canonical_url)
        .map_err(|e| UrlError::Parse(format!("{}: {}", canonical_url, e)))?;

    if page == 1 {
        set_query_param(&mut url, page_param, None);
    } else {
        set_query_param(&mut url, page_param, Some(&page.to_string()));
    }

    Ok(url)
}
