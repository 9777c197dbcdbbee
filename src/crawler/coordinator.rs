//! Crawler coordinator - main traversal logic
//!
//! This module drives the depth-first walk over one site:
//! - Discarding offsite links
//! - Counting visits through the visit map
//! - Fetching each page once and following its links
//!
//! A page is marked visited before it is fetched, so cyclic link graphs
//! terminate: the second arrival at a page only bumps its count.

use crate::config::{CrawlConfig, Traversal};
use crate::crawler::fetcher::{build_http_client, fetch_html};
use crate::crawler::parser::extract_links;
use crate::state::{Visit, VisitMap};
use crate::url::{extract_host, is_same_host, url_key};
use crate::{CrawlError, UrlError};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// Boxed future returned by the recursive traversal
type CrawlFuture<'a> = Pin<Box<dyn Future<Output = VisitMap> + Send + 'a>>;

/// Main crawler structure
///
/// Holds the fixed base URL of one crawl. The base URL bounds the crawl to
/// its hostname and is the anchor every relative link is resolved against.
pub struct Crawler {
    client: Client,
    base_url: Url,
    traversal: Traversal,
}

impl Crawler {
    /// Creates a crawler rooted at `seed_url`
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawlError::InvalidUrl)` - The seed URL is malformed or has no
    ///   host to bound the crawl (`mailto:`, `data:`, ...)
    pub fn new(seed_url: &str, client: Client) -> Result<Self, CrawlError> {
        let base_url = Url::parse(seed_url).map_err(|source| UrlError::Parse {
            url: seed_url.to_string(),
            source,
        })?;

        if extract_host(&base_url).is_none() {
            return Err(UrlError::MissingHost {
                url: seed_url.to_string(),
            }
            .into());
        }

        Ok(Self {
            client,
            base_url,
            traversal: Traversal::default(),
        })
    }

    /// Creates a crawler from a configuration, building its HTTP client
    pub fn from_config(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::new(&config.crawler.seed, client)?.with_traversal(config.crawler.traversal))
    }

    /// Selects the traversal strategy
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// The fixed base URL of this crawl
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Crawls the whole site reachable from the seed URL
    ///
    /// Returns the visit map keyed by normalized URL.
    pub async fn run(&self) -> VisitMap {
        let seed = self.base_url.to_string();

        tracing::info!(
            "Starting {:?} crawl of {}",
            self.traversal,
            extract_host(&self.base_url).unwrap_or_default()
        );

        let pages = match self.traversal {
            Traversal::Recursive => self.crawl_page(&seed, VisitMap::new()).await,
            Traversal::Stack => self.crawl_stack(&seed, VisitMap::new()).await,
        };

        tracing::info!("Crawl complete: {} pages found", pages.len());
        pages
    }

    /// Crawls `current_url` and, recursively, every same-host page it links to
    ///
    /// The map is threaded through each child call in link order and the
    /// final map is returned.
    pub fn crawl_page<'a>(&'a self, current_url: &'a str, mut pages: VisitMap) -> CrawlFuture<'a> {
        Box::pin(async move {
            let Some(url) = self.mark_visit(current_url, &mut pages) else {
                return pages;
            };

            for next_url in self.fetch_links(&url).await {
                pages = self.crawl_page(&next_url, pages).await;
            }

            pages
        })
    }

    /// Same walk as [`Crawler::crawl_page`], driven by an explicit stack
    ///
    /// Links are pushed in reverse so they are popped in document order,
    /// which keeps the visit order identical to the recursion.
    pub async fn crawl_stack(&self, start_url: &str, mut pages: VisitMap) -> VisitMap {
        let mut stack = vec![start_url.to_string()];

        while let Some(current_url) = stack.pop() {
            let Some(url) = self.mark_visit(&current_url, &mut pages) else {
                continue;
            };

            let next_urls = self.fetch_links(&url).await;
            stack.extend(next_urls.into_iter().rev());
        }

        pages
    }

    /// Records a visit of `current_url`
    ///
    /// Returns the parsed URL when the page is on the base host and has not
    /// been seen before, meaning it should be fetched. Returns `None` for
    /// offsite links and revisits.
    fn mark_visit(&self, current_url: &str, pages: &mut VisitMap) -> Option<Url> {
        // Every queued URL comes out of Url::join, so this only guards
        // against callers of crawl_page passing garbage
        let url = match Url::parse(current_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping malformed URL {}: {}", current_url, e);
                return None;
            }
        };

        if !is_same_host(&url, &self.base_url) {
            tracing::debug!("Skipping offsite link {}", current_url);
            return None;
        }

        let key = url_key(&url);
        match pages.record(&key) {
            Visit::First => Some(url),
            Visit::Revisit(count) => {
                tracing::debug!("Revisit of {} (count {})", key, count);
                None
            }
        }
    }

    /// Fetches a page and extracts its links
    ///
    /// A failed fetch is logged and yields no links.
    async fn fetch_links(&self, url: &Url) -> Vec<String> {
        tracing::info!("crawling {}", url);

        match fetch_html(&self.client, url.as_str()).await {
            Ok(html) => extract_links(&html, &self.base_url),
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        }
    }
}

/// Runs a complete crawl described by `config`
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Check the seed URL parses and has a host
/// 3. Walk the site with the configured traversal
///
/// # Returns
///
/// * `Ok(VisitMap)` - Normalized page keys with their visit counts
/// * `Err(CrawlError)` - The client could not be built or the seed is malformed
pub async fn crawl(config: &CrawlConfig) -> Result<VisitMap, CrawlError> {
    let crawler = Crawler::from_config(config)?;
    Ok(crawler.run().await)
}

/// Crawls from `seed_url` with default settings
///
/// # Example
///
/// ```no_run
/// # async fn example() -> page_census::Result<()> {
/// let pages = page_census::crawl_url("https://example.com").await?;
/// for (page, count) in pages.iter() {
///     println!("{}: {}", page, count);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl_url(seed_url: &str) -> Result<VisitMap, CrawlError> {
    crawl(&CrawlConfig::for_seed(seed_url)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawler(seed: &str) -> Crawler {
        Crawler::new(seed, Client::new()).unwrap()
    }

    #[test]
    fn test_new_rejects_malformed_seed() {
        let result = Crawler::new("not a url", Client::new());
        assert!(matches!(result, Err(CrawlError::InvalidUrl(_))));
    }

    #[test]
    fn test_new_rejects_hostless_seed() {
        for seed in ["data:text/html,hello", "mailto:someone@example.com"] {
            let result = Crawler::new(seed, Client::new());
            assert!(
                matches!(result, Err(CrawlError::InvalidUrl(UrlError::MissingHost { .. }))),
                "{} should be rejected",
                seed
            );
        }
    }

    #[test]
    fn test_from_config_rejects_hostless_seed() {
        let config = CrawlConfig::for_seed("data:text/html,hello");
        assert!(matches!(
            Crawler::from_config(&config),
            Err(CrawlError::InvalidUrl(UrlError::MissingHost { .. }))
        ));
    }

    #[test]
    fn test_default_traversal() {
        assert_eq!(crawler("https://example.com").traversal, Traversal::Stack);
    }

    #[test]
    fn test_with_traversal() {
        let c = crawler("https://example.com").with_traversal(Traversal::Recursive);
        assert_eq!(c.traversal, Traversal::Recursive);
    }

    #[test]
    fn test_from_config() {
        let mut config = CrawlConfig::for_seed("https://example.com/docs");
        config.crawler.traversal = Traversal::Recursive;

        let c = Crawler::from_config(&config).unwrap();
        assert_eq!(c.base_url().as_str(), "https://example.com/docs");
        assert_eq!(c.traversal, Traversal::Recursive);
    }

    #[test]
    fn test_mark_first_visit() {
        let c = crawler("https://example.com");
        let mut pages = VisitMap::new();

        let url = c.mark_visit("https://example.com/a/", &mut pages);
        assert_eq!(url.map(|u| u.to_string()), Some("https://example.com/a/".to_string()));
        assert_eq!(pages.count("example.com/a"), Some(1));
    }

    #[test]
    fn test_mark_revisit_is_not_fetched() {
        let c = crawler("https://example.com");
        let mut pages = VisitMap::new();

        assert!(c.mark_visit("https://example.com/a", &mut pages).is_some());
        assert!(c.mark_visit("http://example.com/a/?x=1", &mut pages).is_none());
        assert_eq!(pages.count("example.com/a"), Some(2));
    }

    #[test]
    fn test_mark_offsite_leaves_map_untouched() {
        let c = crawler("https://a.com");
        let mut pages = VisitMap::new();

        assert!(c.mark_visit("https://b.com/x", &mut pages).is_none());
        assert!(c.mark_visit("https://sub.a.com/x", &mut pages).is_none());
        assert!(c.mark_visit("mailto:someone@a.com", &mut pages).is_none());
        assert!(pages.is_empty());
    }

    #[test]
    fn test_mark_malformed_current_url() {
        let c = crawler("https://example.com");
        let mut pages = VisitMap::new();

        assert!(c.mark_visit("/relative", &mut pages).is_none());
        assert!(pages.is_empty());
    }

    #[tokio::test]
    async fn test_crawl_with_invalid_seed() {
        let result = crawl_url("::not a url::").await;
        assert!(matches!(result, Err(CrawlError::InvalidUrl(_))));
    }
}
