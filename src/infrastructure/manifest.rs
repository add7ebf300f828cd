//! Page manifest: a TOML description of a page's head tags

use crate::domain::{Attributes, Provider, TagRegistry};
use crate::error::{MetaTagsError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "metatags.toml";

/// Environment variable pointing at a manifest file
pub const MANIFEST_ENV: &str = "METATAGS_MANIFEST";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A raw keyed tag (`[[meta]]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaSpec {
    pub key: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_tag() -> String {
    "meta".to_string()
}

/// A link (`[[link]]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Replace earlier links with the same rel instead of appending
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub replace: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_providers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description_providers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSpec>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub og: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub twitter: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<MetaSpec>,
    #[serde(default, rename = "link", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSpec>,
    #[serde(
        default,
        deserialize_with = "deserialize_json_ld",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub json_ld: Vec<Value>,
}

impl PageManifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MetaTagsError::ManifestNotFound(path.to_path_buf())
            } else {
                MetaTagsError::Io(e)
            }
        })?;

        let manifest = Self::parse(&contents).map_err(|e| {
            MetaTagsError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded manifest");
        Ok(manifest)
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Save the manifest as pretty TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Locate a manifest: `METATAGS_MANIFEST` first, then `metatags.toml`
    /// in the current directory or any of its parents.
    pub fn discover() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(MANIFEST_ENV) {
            let path = PathBuf::from(path);
            if path.is_file() {
                return Ok(path);
            }
            return Err(MetaTagsError::ManifestNotFound(path));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` looking for `metatags.toml`
    pub fn discover_from(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }

            if !current.pop() {
                return Err(MetaTagsError::ManifestNotFound(start.join(MANIFEST_FILE)));
            }
        }
    }

    /// Manifest written by `metatags init`
    pub fn starter() -> Self {
        let mut og = IndexMap::new();
        og.insert("type".to_string(), "website".to_string());
        let mut twitter = IndexMap::new();
        twitter.insert("card".to_string(), "summary_large_image".to_string());

        let mut website = serde_json::Map::new();
        website.insert("@context".to_string(), Value::from("https://schema.org"));
        website.insert("@type".to_string(), Value::from("WebSite"));
        website.insert("name".to_string(), Value::from("My Site"));
        website.insert("url".to_string(), Value::from("https://example.com/"));

        PageManifest {
            title: Some("My Site".to_string()),
            description: Some("A short description of this page".to_string()),
            canonical: Some("https://example.com/".to_string()),
            robots: Some("index,follow".to_string()),
            og,
            twitter,
            meta: vec![MetaSpec {
                key: "viewport".to_string(),
                tag: default_tag(),
                attributes: Attributes::new().with("content", "width=device-width, initial-scale=1"),
                content: None,
            }],
            json_ld: vec![Value::Object(website)],
            ..Default::default()
        }
    }

    /// Build a fresh registry from this manifest
    pub fn to_registry(&self) -> Result<TagRegistry> {
        let mut registry = TagRegistry::new();
        self.apply(&mut registry)?;
        Ok(registry)
    }

    /// Apply every declaration to `registry` in a fixed order: title,
    /// description, canonical, robots, image, meta, links, og, twitter, json-ld.
    pub fn apply(&self, registry: &mut TagRegistry) -> Result<()> {
        if let Some(title) = &self.title {
            registry.set_title(title, &parse_providers(&self.title_providers)?);
        }
        if let Some(description) = &self.description {
            registry.set_description(description, &parse_providers(&self.description_providers)?);
        }
        if let Some(canonical) = &self.canonical {
            registry.set_canonical(canonical);
        }
        if let Some(robots) = &self.robots {
            registry.set_robots(robots);
        }
        if let Some(image) = &self.image {
            registry.set_image(
                &image.url,
                image.width,
                image.height,
                image.mime_type.as_deref(),
            );
        }

        for meta in &self.meta {
            registry.set_meta(
                &meta.key,
                &meta.tag,
                meta.attributes.clone(),
                meta.content.as_deref(),
            );
        }

        for link in &self.links {
            if link.replace {
                registry.replace_link_by_rel(&link.rel, &link.href, link.attributes.clone());
            } else {
                registry.add_link(&link.rel, &link.href, link.attributes.clone());
            }
        }

        for (key, content) in &self.og {
            registry.set_og(key, content);
        }
        for (key, content) in &self.twitter {
            registry.set_twitter(key, content);
        }

        for document in &self.json_ld {
            registry.add_json_ld(document.clone());
        }

        Ok(())
    }
}

/// Read `[[json_ld]]` tables through `toml::Value` so native TOML dates
/// come out as strings instead of toml's internal datetime wrapper.
fn deserialize_json_ld<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let documents = Vec::<toml::Value>::deserialize(deserializer)?;
    Ok(documents.into_iter().map(toml_to_json).collect())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn parse_providers(names: &[String]) -> Result<Vec<Provider>> {
    names
        .iter()
        .map(|name| Provider::from_str(name).map_err(MetaTagsError::UnknownProvider))
        .collect()
}
