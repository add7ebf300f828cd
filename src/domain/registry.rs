//! Tag registry: accumulates head tags and renders them
//!
//! A registry is built once per page, populated through the chaining
//! mutators below and turned into markup with [`TagRegistry::render`].
//! Rendering does not consume or clear anything.

use super::attributes::Attributes;
use super::provider::Provider;
use super::render;
use super::tag::{LinkEntry, TagEntry};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{trace, warn};

const OG_PREFIX: &str = "og:";
const TWITTER_PREFIX: &str = "twitter:";

/// Accumulated head tags, kept in five independent namespaces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRegistry {
    meta: IndexMap<String, TagEntry>,
    links: Vec<LinkEntry>,
    og: IndexMap<String, TagEntry>,
    twitter: IndexMap<String, TagEntry>,
    json_ld: Vec<Value>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title for the selected providers (all when empty)
    pub fn set_title(&mut self, value: &str, providers: &[Provider]) -> &mut Self {
        for provider in Provider::resolve(providers) {
            match provider {
                Provider::Meta => {
                    self.set_meta("title", "title", Attributes::new(), Some(value));
                }
                Provider::Og => {
                    self.set_og("title", value);
                }
                Provider::Twitter => {
                    self.set_twitter("title", value);
                }
            }
        }
        self
    }

    /// Set the page description for the selected providers (all when empty)
    pub fn set_description(&mut self, value: &str, providers: &[Provider]) -> &mut Self {
        for provider in Provider::resolve(providers) {
            match provider {
                Provider::Meta => {
                    self.set_meta(
                        "description",
                        "meta",
                        Attributes::new().with("content", value),
                        None,
                    );
                }
                Provider::Og => {
                    self.set_og("description", value);
                }
                Provider::Twitter => {
                    self.set_twitter("description", value);
                }
            }
        }
        self
    }

    /// Set the single canonical link, mirrored into `og:url`
    pub fn set_canonical(&mut self, value: &str) -> &mut Self {
        self.replace_link_by_rel("canonical", value, Attributes::new());
        self.set_og("url", value)
    }

    pub fn set_robots(&mut self, value: &str) -> &mut Self {
        self.set_meta(
            "robots",
            "meta",
            Attributes::new().with("content", value),
            None,
        )
    }

    /// Set the share image.
    ///
    /// Dimensions of `0` and an empty MIME type are treated as not given.
    pub fn set_image(
        &mut self,
        value: &str,
        width: Option<u32>,
        height: Option<u32>,
        mime_type: Option<&str>,
    ) -> &mut Self {
        self.set_og("image", value);

        if let Some(width) = width.filter(|w| *w != 0) {
            self.set_og("image:width", &width.to_string());
        }
        if let Some(height) = height.filter(|h| *h != 0) {
            self.set_og("image:height", &height.to_string());
        }
        if let Some(mime_type) = mime_type.filter(|t| !t.is_empty()) {
            self.set_og("image:type", mime_type);
        }

        self.set_twitter("image", value)
    }

    /// Store an arbitrary tag under `key`, replacing any previous entry in place
    pub fn set_meta(
        &mut self,
        key: &str,
        tag_name: &str,
        attributes: Attributes,
        text_content: Option<&str>,
    ) -> &mut Self {
        let entry = TagEntry::new(tag_name, attributes, text_content.map(str::to_string));
        if self.meta.insert(key.to_string(), entry).is_some() {
            trace!(key = %key, "Overwrote meta entry");
        }
        self
    }

    /// Append a link; duplicates of the same `rel` are allowed
    pub fn add_link(&mut self, rel: &str, href: &str, attributes: Attributes) -> &mut Self {
        self.links.push(LinkEntry::new(rel, href, attributes));
        self
    }

    /// Drop every link with this `rel`, then append the new one
    pub fn replace_link_by_rel(&mut self, rel: &str, href: &str, attributes: Attributes) -> &mut Self {
        let before = self.links.len();
        self.links.retain(|link| link.rel != rel);
        let removed = before - self.links.len();
        if removed > 0 {
            trace!(rel, removed, "Replaced links");
        }

        self.add_link(rel, href, attributes)
    }

    /// Set `og:{key}`
    pub fn set_og(&mut self, key: &str, content: &str) -> &mut Self {
        let key = format!("{}{}", OG_PREFIX, key);
        if self.og.insert(key.clone(), TagEntry::meta(content)).is_some() {
            trace!(key = %key, "Overwrote og entry");
        }
        self
    }

    /// Set `twitter:{key}`
    pub fn set_twitter(&mut self, key: &str, content: &str) -> &mut Self {
        let key = format!("{}{}", TWITTER_PREFIX, key);
        if self.twitter.insert(key.clone(), TagEntry::meta(content)).is_some() {
            trace!(key = %key, "Overwrote twitter entry");
        }
        self
    }

    /// Append a JSON-LD document. Its contents are not checked.
    pub fn add_json_ld(&mut self, document: Value) -> &mut Self {
        self.json_ld.push(document);
        self
    }

    /// Read back a generic entry: a title's text, a meta's `content` or a
    /// link's `href`. Any other tag, or a missing key, yields `default`.
    pub fn get_meta_value<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        self.meta
            .get(key)
            .and_then(TagEntry::value)
            .or(default)
    }

    /// Read back an Open Graph value. `key` may omit the `og:` prefix.
    pub fn get_og_value<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        lookup_content(&self.og, OG_PREFIX, key).or(default)
    }

    /// Read back a Twitter card value. `key` may omit the `twitter:` prefix.
    pub fn get_twitter_value<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        lookup_content(&self.twitter, TWITTER_PREFIX, key).or(default)
    }

    pub fn meta_entries(&self) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.meta.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn og_entries(&self) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.og.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn twitter_entries(&self) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.twitter.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn json_ld(&self) -> &[Value] {
        &self.json_ld
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
            && self.links.is_empty()
            && self.og.is_empty()
            && self.twitter.is_empty()
            && self.json_ld.is_empty()
    }

    /// Render all tags: meta, links, og, twitter, then JSON-LD blocks.
    /// Every element ends with a newline.
    pub fn render(&self) -> String {
        let mut output = String::new();

        let elements = self
            .meta
            .iter()
            .map(|(key, entry)| render::keyed_entry(key, entry))
            .chain(self.links.iter().map(render::link_entry))
            .chain(
                self.og
                    .iter()
                    .chain(self.twitter.iter())
                    .map(|(key, entry)| render::keyed_entry(key, entry)),
            );

        for element in elements.flatten() {
            output.push_str(&element);
            output.push('\n');
        }

        for document in &self.json_ld {
            match render::json_ld_block(document) {
                Ok(block) => {
                    output.push_str(&block);
                    output.push('\n');
                }
                Err(e) => warn!("Skipping JSON-LD document that failed to serialize: {}", e),
            }
        }

        output
    }
}

fn lookup_content<'a>(
    entries: &'a IndexMap<String, TagEntry>,
    prefix: &str,
    key: &str,
) -> Option<&'a str> {
    let entry = match entries.get(key) {
        Some(entry) => Some(entry),
        None => entries.get(&format!("{}{}", prefix, key)),
    };
    entry.and_then(|e| e.attributes.get("content"))
}
