//! Ordered HTML attribute maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name/value pairs, rendered in insertion order.
///
/// Setting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(IndexMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, returning the previous value if there was one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of `self`: existing names keep their slot and take
    /// the new value, unseen names are appended.
    pub fn merged(&self, other: &Attributes) -> Attributes {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            merged.set(name, value);
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let attrs = Attributes::new()
            .with("rel", "icon")
            .with("href", "/favicon.ico")
            .with("type", "image/x-icon");

        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["rel", "href", "type"]);
    }

    #[test]
    fn test_overwrite_keeps_slot() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        let previous = attrs.set("a", "3");

        assert_eq!(previous.as_deref(), Some("1"));
        let pairs: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_merged() {
        let base = Attributes::from([("name", "title"), ("content", "x")]);
        let extra = Attributes::from([("name", "override"), ("lang", "en")]);

        let merged = base.merged(&extra);
        let pairs: Vec<(&str, &str)> = merged.iter().collect();
        assert_eq!(
            pairs,
            vec![("name", "override"), ("content", "x"), ("lang", "en")]
        );
        // Inputs are untouched
        assert_eq!(base.get("name"), Some("title"));
    }

    #[test]
    fn test_get_missing() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.get("content"), None);
    }
}
