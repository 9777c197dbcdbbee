//! Page-Census: a same-site page counter
//!
//! This crate walks a website depth-first from a seed URL, following every
//! anchor link that stays on the seed's host, and counts how many times each
//! page is linked to during the walk.

pub mod config;
pub mod crawler;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Census operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("Got network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Got HTTP error for {url}: {status} {reason}")]
    Http {
        url: String,
        status: u16,
        reason: String,
    },

    #[error(
        "Got non-HTML response for {url}: {}",
        .content_type.as_deref().unwrap_or("<no content-type>")
    )]
    ContentType {
        url: String,
        content_type: Option<String>,
    },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
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
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("URL '{url}' has no host")]
    MissingHost { url: String },
}

/// Result type alias for Page-Census operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::{CrawlConfig, Traversal};
pub use crate::crawler::{crawl, crawl_url, Crawler};
pub use crate::state::{Visit, VisitMap};
pub use crate::url::{normalize_url, url_key};
