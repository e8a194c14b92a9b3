use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Ordered set of unique URLs
///
/// Backed by a `BTreeSet`, so iteration is always in ascending byte order
/// and never yields the same URL twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSet {
    urls: BTreeSet<String>,
}

impl UrlSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a URL, returning false if it was already present
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        self.urls.insert(url.into())
    }

    /// Whether the URL is already in the set
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Number of unique URLs
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when the set holds no URLs
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.urls.iter()
    }

    /// Keep only the URLs for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.urls.retain(keep);
    }

    /// Consume the set into a sorted vector
    pub fn into_vec(self) -> Vec<String> {
        self.urls.into_iter().collect()
    }
}

impl<S: Into<String>> Extend<S> for UrlSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.urls.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for UrlSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = UrlSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a UrlSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Outcome of a single extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Where the text was read from (file path or "<stdin>")
    pub source: String,

    /// URL prefix that was scanned for
    pub prefix: String,

    /// Number of matches before deduplication and filtering
    pub total_matches: usize,

    /// Unique URLs in ascending order
    pub urls: Vec<String>,
}

impl ExtractionReport {
    /// Create a new report instance
    pub fn new(source: String, prefix: String, total_matches: usize, urls: UrlSet) -> Self {
        Self {
            source,
            prefix,
            total_matches,
            urls: urls.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = UrlSet::new();
        assert!(set.insert("https://campusmap.ufl.edu/a"));
        assert!(!set.insert("https://campusmap.ufl.edu/a"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("https://campusmap.ufl.edu/a"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let set: UrlSet = ["c", "a", "b", "a"].into_iter().collect();
        let items: Vec<&String> = set.iter().collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        // Uppercase sorts before lowercase
        let set: UrlSet = ["x/b", "x/B", "x/a"].into_iter().collect();
        assert_eq!(set.into_vec(), vec!["x/B", "x/a", "x/b"]);
    }

    #[test]
    fn test_report_keeps_order() {
        let set: UrlSet = ["z", "y"].into_iter().collect();
        let report = ExtractionReport::new("in.js".to_string(), "p".to_string(), 3, set);
        assert_eq!(report.urls, vec!["y", "z"]);
        assert_eq!(report.total_matches, 3);
    }
}
