//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitMap`: counts visits per normalized page key
//! - `Visit`: the outcome of recording one visit

mod visit_map;

// Re-export main types
pub use visit_map::{Visit, VisitMap};
