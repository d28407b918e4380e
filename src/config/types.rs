use serde::{Deserialize, Serialize};

/// Main configuration structure for Job-Harvest
///
/// Every section is optional; the defaults describe the job board the
/// harvester was built for, so the binary runs without a config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the service listens on
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// URL conventions of the target site
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Search path the keyword segment is appended to
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Marker appended to the keyword path segment
    #[serde(rename = "keyword-suffix", default = "default_keyword_suffix")]
    pub keyword_suffix: String,

    /// Query parameter carrying comma-joined filter codes
    #[serde(rename = "filter-param", default = "default_filter_param")]
    pub filter_param: String,

    /// Query parameter carrying the page number (only for pages > 1)
    #[serde(rename = "page-param", default = "default_page_param")]
    pub page_param: String,

    /// Filter code implied by `isintern` when no explicit codes are given
    #[serde(rename = "intern-filter-code", default = "default_intern_filter_code")]
    pub intern_filter_code: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            keyword_suffix: default_keyword_suffix(),
            filter_param: default_filter_param(),
            page_param: default_page_param(),
            intern_filter_code: default_intern_filter_code(),
        }
    }
}

/// CSS selectors for the results page template
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectorConfig {
    /// One element per job listing
    #[serde(rename = "job-card", default = "default_job_card")]
    pub job_card: String,

    /// Heading inside a card holding the job title
    #[serde(rename = "job-title", default = "default_job_title")]
    pub job_title: String,

    /// Anchor inside a card whose href is the job link
    #[serde(rename = "job-link", default = "default_job_link")]
    pub job_link: String,

    /// Text node stating the total number of result pages
    #[serde(rename = "max-page", default = "default_max_page")]
    pub max_page: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            job_card: default_job_card(),
            job_title: default_job_title(),
            job_link: default_job_link(),
            max_page: default_max_page(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-fetch timeout in seconds; unset means no timeout
    #[serde(
        rename = "request-timeout-secs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://www.pracuj.pl/praca/".to_string()
}

fn default_keyword_suffix() -> String {
    ";kw".to_string()
}

fn default_filter_param() -> String {
    "et".to_string()
}

fn default_page_param() -> String {
    "pn".to_string()
}

fn default_intern_filter_code() -> u32 {
    1
}

fn default_job_card() -> String {
    "div.tiles_b18pwp01.core_po9665q".to_string()
}

fn default_job_title() -> String {
    "h2.tiles_h1p4o5k6".to_string()
}

fn default_job_link() -> String {
    "a.tiles_cnb3rfy.core_n194fgoq".to_string()
}

fn default_max_page() -> String {
    r#"span[data-test="top-pagination-max-page-number"]"#.to_string()
}

fn default_user_agent() -> String {
    format!("job-harvest/{}", env!("CARGO_PKG_VERSION"))
}
