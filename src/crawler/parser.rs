//! HTML parser for extracting links
//!
//! Parsing goes through `scraper` (html5ever), which recovers from malformed
//! markup the way browsers do, so extraction never fails as a whole.

use scraper::{Html, Selector};
use url::Url;

/// Extracts the absolute URLs of all anchor hrefs in an HTML document
///
/// # Link Extraction Rules
///
/// - Every `<a>` element with an `href` attribute, in document order
/// - Relative hrefs are resolved against `base_url`
/// - Duplicates are kept; deduplication happens during traversal
/// - An href that cannot be resolved is logged and skipped
/// - Anchors without `href` are skipped silently
///
/// Schemes are not filtered here. `mailto:` and friends resolve to hostless
/// URLs which the crawler treats as offsite.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
///
/// # Example
///
/// ```
/// use page_census::crawler::extract_links;
/// use url::Url;
///
/// let base_url = Url::parse("https://example.com").unwrap();
/// let links = extract_links(r#"<a href="/about">About</a>"#, &base_url);
/// assert_eq!(links, vec!["https://example.com/about".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            match base_url.join(href) {
                Ok(absolute_url) => links.push(absolute_url.to_string()),
                Err(e) => tracing::warn!("{}: {}", e, href),
            }
        }
    }

    links
}
