//! URL handling module for Page-Census
//!
//! This module provides the deduplication key used by the visit map and the
//! same-host check that keeps a crawl on its seed's site.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_host, is_same_host};
pub use normalize::{normalize_url, url_key};
