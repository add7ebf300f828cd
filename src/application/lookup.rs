//! Lookup use case: read one value back out of a registry

use crate::domain::{Provider, TagRegistry};
use crate::error::{MetaTagsError, Result};
use std::str::FromStr;

pub struct LookupService {
    registry: TagRegistry,
}

impl LookupService {
    pub fn new(registry: TagRegistry) -> Self {
        LookupService { registry }
    }

    /// Resolve `key` in `namespace` (`meta`, `og` or `twitter`)
    pub fn lookup(&self, namespace: &str, key: &str) -> Result<String> {
        let provider = Provider::from_str(namespace).map_err(MetaTagsError::UnknownNamespace)?;

        let value = match provider {
            Provider::Meta => self.registry.get_meta_value(key, None),
            Provider::Og => self.registry.get_og_value(key, None),
            Provider::Twitter => self.registry.get_twitter_value(key, None),
        };

        value
            .map(str::to_string)
            .ok_or_else(|| MetaTagsError::KeyNotFound(format!("{}:{}", provider, key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LookupService {
        let mut registry = TagRegistry::new();
        registry
            .set_title("Home", &[])
            .set_canonical("https://example.com/");
        LookupService::new(registry)
    }

    #[test]
    fn test_lookup_each_namespace() {
        let service = service();
        assert_eq!(service.lookup("meta", "title").unwrap(), "Home");
        assert_eq!(service.lookup("og", "url").unwrap(), "https://example.com/");
        assert_eq!(service.lookup("twitter", "twitter:title").unwrap(), "Home");
    }

    #[test]
    fn test_lookup_missing_key() {
        match service().lookup("og", "image").unwrap_err() {
            MetaTagsError::KeyNotFound(key) => assert_eq!(key, "og:image"),
            other => panic!("Expected KeyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_unknown_namespace() {
        match service().lookup("facebook", "title").unwrap_err() {
            MetaTagsError::UnknownNamespace(name) => assert_eq!(name, "facebook"),
            other => panic!("Expected UnknownNamespace, got {:?}", other),
        }
    }
}
