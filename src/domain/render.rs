//! HTML serialization of registry entries

use super::attributes::Attributes;
use super::tag::{LinkEntry, TagEntry};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::warn;

/// Escape an attribute value for use inside double quotes.
pub fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape element text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Tag and attribute names are limited to `[A-Za-z0-9:_-]`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-'))
}

/// Serialize one element. With `text` the element gets a closing tag,
/// without it renders as a void element.
///
/// An invalid tag name drops the element (`None`); invalid attribute names
/// drop just that attribute.
pub fn element(tag_name: &str, attributes: &Attributes, text: Option<&str>) -> Option<String> {
    if !is_valid_name(tag_name) {
        warn!(tag = %tag_name, "Skipping element with invalid tag name");
        return None;
    }

    let mut out = format!("<{}", tag_name);
    for (name, value) in attributes.iter() {
        if !is_valid_name(name) {
            warn!(tag = %tag_name, attribute = %name, "Skipping invalid attribute name");
            continue;
        }
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    out.push('>');

    if let Some(text) = text {
        out.push_str(&escape_text(text));
        out.push_str(&format!("</{}>", tag_name));
    }

    Some(out)
}

/// Serialize a keyed entry. `meta` elements get a leading `name="{key}"`
/// that the entry's own `name` attribute may override in place.
pub fn keyed_entry(key: &str, entry: &TagEntry) -> Option<String> {
    let attributes = if entry.tag_name == "meta" {
        Attributes::new()
            .with("name", key)
            .merged(&entry.attributes)
    } else {
        entry.attributes.clone()
    };

    element(&entry.tag_name, &attributes, entry.text_content.as_deref())
}

pub fn link_entry(link: &LinkEntry) -> Option<String> {
    let attributes = Attributes::new()
        .with("rel", link.rel.as_str())
        .with("href", link.href.as_str())
        .merged(&link.attributes);

    element("link", &attributes, None)
}

/// Pretty-print a JSON-LD document into a script block.
///
/// Slashes stay unescaped. `<` only occurs inside JSON strings, so it is
/// written as `\u003c` to keep `</script>` out of the block.
pub fn json_ld_block(document: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;

    let json = String::from_utf8_lossy(&buf).replace('<', "\\u003c");
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        json
    ))
}
