//! Path-to-URL mapping subsystem.
//!
//! # Data Flow
//! ```text
//! redirects document (YAML | JSON bytes)
//!     → decode.rs (deserialize into ordered PathUrlRecord list)
//!     → Mapping::from_records (fold, later records overwrite earlier ones)
//!     → Mapping (immutable, shared via Arc with the resolver)
//! ```
//!
//! # Design Decisions
//! - Exact-key lookup only; no prefix or wildcard matching
//! - Duplicate paths resolve by document order (last write wins)
//! - No mutating API after construction

pub mod decode;

use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use decode::{decode, DecodeError, Format, UnknownFormat};

/// One `{path, url}` entry of a redirects document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathUrlRecord {
    /// Request path to match, compared byte-for-byte.
    pub path: String,

    /// Destination sent back in the `Location` header.
    pub url: String,
}

impl PathUrlRecord {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Key-unique association from request path to destination URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: HashMap<String, String>,
}

impl Mapping {
    /// Fold records in order. A later record for the same path replaces the
    /// earlier one.
    pub fn from_records(records: impl IntoIterator<Item = PathUrlRecord>) -> Self {
        records.into_iter().collect()
    }

    /// Destination URL for `path`, if one is mapped.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, url)` pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl FromIterator<PathUrlRecord> for Mapping {
    fn from_iter<I: IntoIterator<Item = PathUrlRecord>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for record in iter {
            entries.insert(record.path, record.url);
        }
        Self { entries }
    }
}

impl From<HashMap<String, String>> for Mapping {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<P, U, const N: usize> From<[(P, U); N]> for Mapping
where
    P: Into<String>,
    U: Into<String>,
{
    fn from(pairs: [(P, U); N]) -> Self {
        pairs
            .into_iter()
            .map(|(path, url)| PathUrlRecord::new(path, url))
            .collect()
    }
}

/// Borrowing iterator over a [`Mapping`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(path, url)| (path.as_str(), url.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_record_wins() {
        let mapping = Mapping::from_records(vec![
            PathUrlRecord::new("/a", "X"),
            PathUrlRecord::new("/b", "Y"),
            PathUrlRecord::new("/a", "Z"),
        ]);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("/a"), Some("Z"));
        assert_eq!(mapping.get("/b"), Some("Y"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let mapping = Mapping::from([("/slack", "https://slack.com")]);

        assert!(mapping.contains("/slack"));
        assert_eq!(mapping.get("/slack/"), None);
        assert_eq!(mapping.get("/SLACK"), None);
        assert_eq!(mapping.get("/sl"), None);
    }

    #[test]
    fn test_empty_records() {
        let mapping = Mapping::from_records(Vec::new());
        assert!(mapping.is_empty());
        assert_eq!(mapping.iter().count(), 0);
    }

    #[test]
    fn test_from_hash_map() {
        let mut entries = HashMap::new();
        entries.insert("/github".to_string(), "https://github.com/user".to_string());

        let mapping = Mapping::from(entries);
        assert_eq!(mapping.get("/github"), Some("https://github.com/user"));

        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, vec![("/github", "https://github.com/user")]);
    }
}
