//! Redirection entries and their reduction to a lookup map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single `path -> url` redirection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Redirection {
    /// Exact request path to match (e.g. `/foo`).
    pub path: String,

    /// Destination sent back in the `Location` header.
    pub url: String,
}

impl Redirection {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Ordered list of redirections as they appeared in the source document.
///
/// Serializes as a bare sequence, which is the top-level shape of every
/// redirection document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RedirectionTable(Vec<Redirection>);

impl RedirectionTable {
    pub fn new(entries: Vec<Redirection>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Redirection> {
        self.0.iter()
    }

    /// Reduce the table to a `path -> url` map.
    ///
    /// Entries are inserted in order, so when a path appears more than once
    /// the last URL wins.
    pub fn into_map(self) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(self.0.len());
        for Redirection { path, url } in self.0 {
            map.insert(path, url);
        }
        map
    }
}

impl From<Vec<Redirection>> for RedirectionTable {
    fn from(entries: Vec<Redirection>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Redirection> for RedirectionTable {
    fn from_iter<I: IntoIterator<Item = Redirection>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RedirectionTable {
    type Item = Redirection;
    type IntoIter = std::vec::IntoIter<Redirection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RedirectionTable {
    type Item = &'a Redirection;
    type IntoIter = std::slice::Iter<'a, Redirection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Free-function form of [`RedirectionTable::into_map`].
pub fn reduce_to_mapping(table: RedirectionTable) -> HashMap<String, String> {
    table.into_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_reduces_to_empty_map() {
        let map = RedirectionTable::default().into_map();
        assert!(map.is_empty());
    }

    #[test]
    fn test_last_entry_wins() {
        let table: RedirectionTable = vec![
            Redirection::new("/x", "A"),
            Redirection::new("/y", "C"),
            Redirection::new("/x", "B"),
        ]
        .into();

        let map = reduce_to_mapping(table);
        assert_eq!(map.len(), 2);
        assert_eq!(map["/x"], "B");
        assert_eq!(map["/y"], "C");
    }

    #[test]
    fn test_empty_strings_kept_verbatim() {
        let table: RedirectionTable = vec![Redirection::new("", "")].into_iter().collect();
        let map = table.into_map();
        assert_eq!(map.get(""), Some(&String::new()));
    }

    #[test]
    fn test_order_preserved() {
        let table = RedirectionTable::new(vec![
            Redirection::new("/b", "2"),
            Redirection::new("/a", "1"),
        ]);
        let paths: Vec<&str> = table.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/b", "/a"]);
    }
}
