//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with status and content-type checks
//! - HTML parsing and link extraction
//! - The depth-first traversal that ties them together

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{crawl, crawl_url, Crawler};
pub use fetcher::{build_http_client, fetch_html};
pub use parser::extract_links;
