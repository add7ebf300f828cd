//! Tag records held by the registry

use super::attributes::Attributes;

/// A single head element stored under a logical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Element name (`meta`, `title`, `link`, ...)
    pub tag_name: String,

    /// Attributes in render order
    pub attributes: Attributes,

    /// Inner text; `None` renders a void element
    pub text_content: Option<String>,
}

impl TagEntry {
    pub fn new(
        tag_name: impl Into<String>,
        attributes: Attributes,
        text_content: Option<String>,
    ) -> Self {
        TagEntry {
            tag_name: tag_name.into(),
            attributes,
            text_content,
        }
    }

    /// `<meta content="...">`
    pub fn meta(content: impl Into<String>) -> Self {
        TagEntry::new("meta", Attributes::new().with("content", content), None)
    }

    /// The value this entry stands for when read back.
    ///
    /// `title` yields its text, `meta` its `content`, `link` its `href`.
    pub fn value(&self) -> Option<&str> {
        match self.tag_name.as_str() {
            "title" => self.text_content.as_deref(),
            "meta" => self.attributes.get("content"),
            "link" => self.attributes.get("href"),
            _ => None,
        }
    }
}

/// A `<link>` element in the link list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub rel: String,
    pub href: String,
    /// Extra attributes rendered after `rel` and `href`
    pub attributes: Attributes,
}

impl LinkEntry {
    pub fn new(rel: impl Into<String>, href: impl Into<String>, attributes: Attributes) -> Self {
        LinkEntry {
            rel: rel.into(),
            href: href.into(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_title() {
        let entry = TagEntry::new("title", Attributes::new(), Some("Home".to_string()));
        assert_eq!(entry.value(), Some("Home"));
    }

    #[test]
    fn test_value_of_meta() {
        let entry = TagEntry::meta("noindex");
        assert_eq!(entry.value(), Some("noindex"));
    }

    #[test]
    fn test_value_of_link() {
        let entry = TagEntry::new(
            "link",
            Attributes::from([("rel", "canonical"), ("href", "https://example.com/")]),
            None,
        );
        assert_eq!(entry.value(), Some("https://example.com/"));
    }

    #[test]
    fn test_value_of_other_tag() {
        let entry = TagEntry::new("base", Attributes::from([("href", "/")]), None);
        assert_eq!(entry.value(), None);
    }

    #[test]
    fn test_meta_without_content() {
        let entry = TagEntry::new("meta", Attributes::from([("charset", "utf-8")]), None);
        assert_eq!(entry.value(), None);
    }
}
