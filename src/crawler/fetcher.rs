//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a proper user agent string
//! - GET requests to fetch page content
//! - Classifying failures into network, status and content-type errors
//!
//! Each page is requested exactly once. There are no retries and the
//! transport's default timeout and redirect policy apply.

use crate::config::UserAgentConfig;
use crate::CrawlError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(CrawlError::Client)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use page_census::config::UserAgentConfig;
/// use page_census::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, CrawlError> {
    Client::builder()
        .user_agent(config.header_value())
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(CrawlError::Client)
}

/// Fetches a URL and returns its body if it is an HTML page
///
/// # Failure Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | DNS failure, connection refused, timeout, body read failure | `Network` |
/// | Status code >= 400 | `Http` |
/// | Missing `content-type` or not `text/html` | `ContentType` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CrawlError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(CrawlError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status_reason(status),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    if !is_html(content_type.as_deref()) {
        return Err(CrawlError::ContentType {
            url: url.to_string(),
            content_type,
        });
    }

    response.text().await.map_err(|source| CrawlError::Network {
        url: url.to_string(),
        source,
    })
}

/// Standard reason phrase for a status code
///
/// Codes without a registered phrase (e.g. 599) report `<unknown status code>`.
fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("<unknown status code>")
        .to_string()
}

/// Returns true if a Content-Type header value denotes an HTML document
fn is_html(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("text/html"))
}
