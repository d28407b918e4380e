//! Configuration module for Job-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error for the binary: [`Config::default`] carries the
//! target site's conventions.
//!
//! # Example
//!
//! ```no_run
//! use job_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Searching under: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SelectorConfig, ServerConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
