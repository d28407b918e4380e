//! Compiled selectors for the results page template

use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// The four selectors describing one results page
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    pub job_card: Selector,
    pub job_title: Selector,
    pub job_link: Selector,
    pub max_page: Selector,
}

impl SiteSelectors {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(SiteSelectors)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed to compile
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            job_card: compile("job_card", &config.job_card)?,
            job_title: compile("job_title", &config.job_title)?,
            job_link: compile("job_link", &config.job_link)?,
            max_page: compile("max_page", &config.max_page)?,
        })
    }
}

fn compile(name: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css)
        .map_err(|e| ConfigError::InvalidSelector(format!("{} '{}': {:?}", name, css, e)))
}
