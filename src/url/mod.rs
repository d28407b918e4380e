//! URL handling module for Job-Harvest
//!
//! This module builds the canonical search URL for a query and derives the URL
//! of every further results page from it.

mod pagination;
mod search;

// Re-export main functions
pub use pagination::{build_page_url, CrawlTarget};
pub use search::{build_search_url, SearchQuery};

use url::Url;

/// Sets, replaces, or removes a single query parameter
///
/// All other parameters keep their order and decoded values. The first
/// occurrence of `name` is replaced in place; later duplicates are dropped.
/// Removing a parameter that is not present leaves the URL untouched, and an
/// emptied query string is removed entirely rather than leaving a trailing `?`.
pub(crate) fn set_query_param(url: &mut Url, name: &str, value: Option<&str>) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let present = pairs.iter().any(|(key, _)| key == name);

    match value {
        None if !present => return,
        None => pairs.retain(|(key, _)| key != name),
        Some(value) => {
            let mut seen = false;
            pairs.retain_mut(|(key, current)| {
                if key != name {
                    return true;
                }
                if seen {
                    return false;
                }
                seen = true;
                *current = value.to_string();
                true
            });
            if !seen {
                pairs.push((name.to_string(), value.to_string()));
            }
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs.iter());
    }
}
