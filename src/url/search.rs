use crate::config::SiteConfig;
use crate::url::set_query_param;
use crate::UrlError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A single search request against the job board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text search term
    pub term: String,

    /// Filter codes, joined with commas in the filter parameter
    pub filter_codes: Vec<u32>,

    /// Legacy shortcut implying the intern filter code
    pub is_intern: bool,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_filter_codes(mut self, codes: Vec<u32>) -> Self {
        self.filter_codes = codes;
        self
    }

    pub fn intern(mut self, is_intern: bool) -> Self {
        self.is_intern = is_intern;
        self
    }

    /// Resolves the filter codes actually sent to the site
    ///
    /// Explicit codes always win. Without them, `is_intern` implies
    /// `[intern_code]`; otherwise no filter is applied.
    pub fn effective_filter_codes(&self, intern_code: u32) -> Vec<u32> {
        if self.filter_codes.is_empty() && self.is_intern {
            vec![intern_code]
        } else {
            self.filter_codes.clone()
        }
    }
}

/// Builds the canonical (page 1) search URL for a term and filter codes
///
/// The term is percent-encoded as a single path segment under the site's base
/// path and followed by the keyword suffix (`<base>/<term>;kw`). Non-empty
/// filter codes become one comma-joined query parameter (`et=1,3`, transmitted
/// form-encoded as `et=1%2C3`). Empty codes add no query at all.
///
/// # Examples
///
/// ```
/// use job_harvest::config::SiteConfig;
/// use job_harvest::url::build_search_url;
///
/// let url = build_search_url(&SiteConfig::default(), "golang", &[]).unwrap();
/// assert_eq!(url.as_str(), "https://www.pracuj.pl/praca/golang;kw");
/// ```
pub fn build_search_url(
    site: &SiteConfig,
    term: &str,
    filter_codes: &[u32],
) -> Result<Url, UrlError> {
    let mut url = Url::parse(&site.base_url)
        .map_err(|e| UrlError::Parse(format!("{}: {}", site.base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| UrlError::CannotBeABase(site.base_url.clone()))?
        .pop_if_empty()
        .push(&format!("{}{}", term, site.keyword_suffix));

    if !filter_codes.is_empty() {
        let joined = filter_codes
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(",");
        set_query_param(&mut url, &site.filter_param, Some(&joined));
    }

    tracing::debug!(
        term = %term,
        filter_codes = ?filter_codes,
        url = %url,
        "Built search URL"
    );

    Ok(url)
}
