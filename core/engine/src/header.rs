//! FILENAME: core/engine/src/header.rs
//! PURPOSE: The ordered list of column names.
//! CONTEXT: Names need not be unique; columns are addressed by index.
//! Ordering is lexicographic by name, and a header that is a prefix of
//! another sorts first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Header(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, j: usize) -> Option<&str> {
        self.0.get(j).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub(crate) fn push(&mut self, name: String) {
        self.0.push(name);
    }

    pub(crate) fn remove(&mut self, j: usize) -> String {
        self.0.remove(j)
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    pub(crate) fn extend_from(&mut self, other: &Header) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl From<Vec<String>> for Header {
    fn from(names: Vec<String>) -> Self {
        Header(names)
    }
}

impl From<Vec<&str>> for Header {
    fn from(names: Vec<&str>) -> Self {
        Header::new(names)
    }
}

impl<const N: usize> From<[&str; N]> for Header {
    fn from(names: [&str; N]) -> Self {
        Header::new(names)
    }
}

impl<S: Into<String>> FromIterator<S> for Header {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Header::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_equal() {
        assert_eq!(Header::from(["a", "b"]), Header::from(["a", "b"]));
        assert_ne!(Header::from(["a", "b"]), Header::from(["a"]));
        assert_ne!(Header::from(["a", "b"]), Header::from(["a", "c"]));
    }

    #[test]
    fn test_compare_by_name_then_length() {
        let ab = Header::from(["a", "b"]);
        assert_eq!(ab.cmp(&Header::from(["a", "c"])), Ordering::Less);
        assert_eq!(ab.cmp(&Header::from(["a"])), Ordering::Greater);
        assert_eq!(Header::from(["a"]).cmp(&ab), Ordering::Less);
        assert_eq!(ab.cmp(&ab.clone()), Ordering::Equal);
        assert_eq!(Header::from(["b"]).cmp(&ab), Ordering::Greater);
    }

    #[test]
    fn test_accessors() {
        let header: Header = vec!["x", "y"].into_iter().collect();
        assert_eq!(header.len(), 2);
        assert_eq!(header.get(1), Some("y"));
        assert_eq!(header.get(2), None);
        assert_eq!(header.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
