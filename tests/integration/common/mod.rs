//! Fixtures shared by the integration tests

#![allow(dead_code)]

use job_harvest::config::Config;
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/praca/golang;kw";

/// Config pointing the site at a mock server
pub fn test_config(mock_server: &MockServer) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}/praca/", mock_server.uri());
    config
}

/// One job card in the site's markup
pub fn card(title: &str, link: Option<&str>) -> String {
    let anchor = match link {
        Some(link) => format!(
            r#"<a class="tiles_cnb3rfy core_n194fgoq" href="{}">Zobacz</a>"#,
            link
        ),
        None => r#"<a class="tiles_cnb3rfy core_n194fgoq">Zobacz</a>"#.to_string(),
    };
    format!(
        r#"<div class="tiles_b18pwp01 core_po9665q">
             <h2 class="tiles_h1p4o5k6"> {} </h2>
             {}
           </div>"#,
        title, anchor
    )
}

/// A results page with an optional max-page marker and the given cards
pub fn results_page(max_page: Option<&str>, cards: &[(&str, &str)]) -> String {
    let marker = max_page
        .map(|value| {
            format!(
                r#"<span data-test="top-pagination-max-page-number">{}</span>"#,
                value
            )
        })
        .unwrap_or_default();
    let body: String = cards
        .iter()
        .map(|(title, link)| card(title, Some(link)))
        .collect();
    format!(
        "<html><head><title>Oferty</title></head><body><nav>{}</nav><main>{}</main></body></html>",
        marker, body
    )
}
