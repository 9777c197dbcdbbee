use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a URL into the key used to deduplicate visits
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Take the host, including any non-default port
/// 3. Append the path
/// 4. Strip one trailing slash
///
/// Scheme, query string and fragment do not take part in the key, so
/// `http://example.com/a?x=1` and `https://example.com/a/` are the same page.
///
/// # Arguments
///
/// * `url_str` - The absolute URL string to normalize
///
/// # Returns
///
/// * `Ok(String)` - The normalized key
/// * `Err(UrlError)` - The URL could not be parsed
///
/// # Examples
///
/// ```
/// use page_census::url::normalize_url;
///
/// let key = normalize_url("https://example.com/path/").unwrap();
/// assert_eq!(key, "example.com/path");
/// ```
pub fn normalize_url(url_str: &str) -> UrlResult<String> {
    let url = Url::parse(url_str).map_err(|source| UrlError::Parse {
        url: url_str.to_string(),
        source,
    })?;

    Ok(url_key(&url))
}

/// Computes the normalized key of an already parsed URL
///
/// URLs without a host (`mailto:`, `data:`) contribute only their path.
pub fn url_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");

    let mut key = match url.port() {
        Some(port) => format!("{}:{}{}", host, port, url.path()),
        None => format!("{}{}", host, url.path()),
    };

    if key.ends_with('/') {
        key.pop();
    }

    key
}
