use crate::config::types::{Config, HttpConfig, SelectorConfig, ServerConfig, SiteConfig};
use crate::ConfigError;
use scraper::Selector;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_site_config(&config.site)?;
    validate_selector_config(&config.selectors)?;
    validate_http_config(&config.http)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;
    Ok(())
}

/// Validates the target site's URL conventions
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if base.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' cannot carry path segments",
            config.base_url
        )));
    }

    for (name, value) in [
        ("keyword_suffix", &config.keyword_suffix),
        ("filter_param", &config.filter_param),
        ("page_param", &config.page_param),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    if config.filter_param == config.page_param {
        return Err(ConfigError::Validation(format!(
            "filter_param and page_param must differ, both are '{}'",
            config.page_param
        )));
    }

    Ok(())
}

/// Every selector must compile, otherwise extraction would silently match nothing
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("job_card", &config.job_card),
        ("job_title", &config.job_title),
        ("job_link", &config.job_link),
        ("max_page", &config.max_page),
    ] {
        Selector::parse(value).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} '{}': {:?}", name, value, e))
        })?;
    }
    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be > 0 when set".to_string(),
        ));
    }

    Ok(())
}
