//! Output formatting utilities

use crate::domain::TagRegistry;

/// Format a short per-namespace listing of a registry
pub fn format_summary(registry: &TagRegistry) -> String {
    if registry.is_empty() {
        return "No tags".to_string();
    }

    let mut output = String::new();

    for (key, entry) in registry.meta_entries() {
        output.push_str(&format!(
            "meta     {} = {}\n",
            key,
            entry.value().unwrap_or("-")
        ));
    }
    for link in registry.links() {
        output.push_str(&format!("link     {} = {}\n", link.rel, link.href));
    }
    for (key, entry) in registry.og_entries() {
        output.push_str(&format!("og       {} = {}\n", key, entry.value().unwrap_or("-")));
    }
    for (key, entry) in registry.twitter_entries() {
        output.push_str(&format!("twitter  {} = {}\n", key, entry.value().unwrap_or("-")));
    }
    if !registry.json_ld().is_empty() {
        output.push_str(&format!("json-ld  {} document(s)\n", registry.json_ld().len()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attributes;
    use serde_json::json;

    #[test]
    fn test_format_empty() {
        assert_eq!(format_summary(&TagRegistry::new()), "No tags");
    }

    #[test]
    fn test_format_summary() {
        let mut registry = TagRegistry::new();
        registry
            .set_title("Home", &[])
            .add_link("icon", "/favicon.ico", Attributes::new())
            .add_json_ld(json!({"@type": "WebSite"}));

        let output = format_summary(&registry);
        assert_eq!(
            output,
            "meta     title = Home\n\
             link     icon = /favicon.ico\n\
             og       og:title = Home\n\
             twitter  twitter:title = Home\n\
             json-ld  1 document(s)\n"
        );
    }

    #[test]
    fn test_format_entry_without_value() {
        let mut registry = TagRegistry::new();
        registry.set_meta("charset", "meta", Attributes::from([("charset", "utf-8")]), None);

        assert_eq!(format_summary(&registry), "meta     charset = -\n");
    }
}
