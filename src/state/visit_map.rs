//! Visit accounting for a single crawl
//!
//! The visit map is the only output of a crawl: each normalized page key maps
//! to the number of times the crawl reached that page.

use std::collections::hash_map::{self, HashMap};

/// Outcome of recording a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The key was not in the map and now has a count of 1.
    /// The page should be fetched and its links followed.
    First,

    /// The key was already present; holds the incremented count.
    /// The page must not be fetched again.
    Revisit(u32),
}

/// Mapping from normalized page key to visit count
///
/// Every key present has a count of at least 1. Keys are only ever added or
/// incremented, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitMap {
    counts: HashMap<String, u32>,
}

impl VisitMap {
    /// Creates an empty visit map
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit of `key`
    ///
    /// Inserts the key with a count of 1 on the first visit, otherwise
    /// increments its count.
    pub fn record(&mut self, key: &str) -> Visit {
        match self.counts.get_mut(key) {
            Some(count) => {
                *count = count.saturating_add(1);
                Visit::Revisit(*count)
            }
            None => {
                self.counts.insert(key.to_string(), 1);
                Visit::First
            }
        }
    }

    /// Returns the visit count for a key, if it was visited
    pub fn count(&self, key: &str) -> Option<u32> {
        self.counts.get(key).copied()
    }

    /// Returns true if the key has been visited at least once
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct pages visited
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(key, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Consumes the map, returning the raw counts
    pub fn into_inner(self) -> HashMap<String, u32> {
        self.counts
    }
}

impl From<VisitMap> for HashMap<String, u32> {
    fn from(map: VisitMap) -> Self {
        map.into_inner()
    }
}

impl<'a> FromIterator<&'a str> for VisitMap {
    /// Builds a map by recording each key in turn
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for key in iter {
            map.record(key);
        }
        map
    }
}

impl IntoIterator for VisitMap {
    type Item = (String, u32);
    type IntoIter = hash_map::IntoIter<String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
