use url::Url;

/// Extracts the hostname from a URL
///
/// The port is not part of the hostname. The `url` crate already lowercases
/// hosts of http(s) URLs, so the value can be compared directly.
///
/// # Returns
///
/// * `Some(String)` - The hostname
/// * `None` - If the URL has no host (`mailto:`, `data:`, ...)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use page_census::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_string())
}

/// Returns true if both URLs point at exactly the same hostname
///
/// Subdomains are different hosts. Ports and schemes are ignored. A URL
/// without a host never matches.
pub fn is_same_host(candidate: &Url, base: &Url) -> bool {
    match (candidate.host_str(), base.host_str()) {
        (Some(candidate_host), Some(base_host)) => candidate_host == base_host,
        _ => false,
    }
}
