//! Library-level tests for the tag registry

use metatags::{Attributes, Provider, TagRegistry};
use serde_json::json;

#[test]
fn test_full_page_render() {
    let mut tags = TagRegistry::new();
    tags.set_title("Rust & You", &[])
        .set_description("A \"friendly\" intro", &[])
        .set_canonical("https://example.com/rust")
        .set_robots("index,follow")
        .set_image("https://example.com/cover.png", Some(1200), Some(630), Some("image/png"))
        .set_twitter("card", "summary_large_image")
        .add_link("icon", "/favicon.ico", Attributes::from([("type", "image/x-icon")]))
        .add_json_ld(json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "Rust & You"
        }));

    let expected = "\
<title>Rust &amp; You</title>
<meta name=\"description\" content=\"A &quot;friendly&quot; intro\">
<meta name=\"robots\" content=\"index,follow\">
<link rel=\"canonical\" href=\"https://example.com/rust\">
<link rel=\"icon\" href=\"/favicon.ico\" type=\"image/x-icon\">
<meta name=\"og:title\" content=\"Rust &amp; You\">
<meta name=\"og:description\" content=\"A &quot;friendly&quot; intro\">
<meta name=\"og:url\" content=\"https://example.com/rust\">
<meta name=\"og:image\" content=\"https://example.com/cover.png\">
<meta name=\"og:image:width\" content=\"1200\">
<meta name=\"og:image:height\" content=\"630\">
<meta name=\"og:image:type\" content=\"image/png\">
<meta name=\"twitter:title\" content=\"Rust &amp; You\">
<meta name=\"twitter:description\" content=\"A &quot;friendly&quot; intro\">
<meta name=\"twitter:image\" content=\"https://example.com/cover.png\">
<meta name=\"twitter:card\" content=\"summary_large_image\">
<script type=\"application/ld+json\">
{
    \"@context\": \"https://schema.org\",
    \"@type\": \"Article\",
    \"headline\": \"Rust & You\"
}
</script>
";

    assert_eq!(tags.render(), expected);
}

#[test]
fn test_title_round_trips_through_meta() {
    for value in ["", "Plain", "Ünïcödé", "<b>bold</b>", "quote \" and ' apostrophe"] {
        let mut tags = TagRegistry::new();
        tags.set_title(value, &[]);
        assert_eq!(tags.get_meta_value("title", None), Some(value));
    }
}

#[test]
fn test_repeated_canonical_leaves_one_link() {
    let mut tags = TagRegistry::new();
    tags.set_canonical("https://example.com/a")
        .add_link("alternate", "https://example.com/de", Attributes::new())
        .set_canonical("https://example.com/b")
        .set_canonical("https://example.com/c");

    let rendered = tags.render();
    assert_eq!(rendered.matches("rel=\"canonical\"").count(), 1);
    assert!(rendered.contains("<link rel=\"canonical\" href=\"https://example.com/c\">"));
    // The alternate link now comes first
    let alternate = rendered.find("alternate").unwrap();
    let canonical = rendered.find("canonical").unwrap();
    assert!(alternate < canonical);
}

#[test]
fn test_zero_width_image_has_no_width_tag() {
    let mut tags = TagRegistry::new();
    tags.set_image("https://example.com/a.png", Some(0), None, None);

    let rendered = tags.render();
    assert!(!rendered.contains("og:image:width"));
    assert!(rendered.contains("og:image\""));
}

#[test]
fn test_no_raw_specials_inside_attributes() {
    let mut tags = TagRegistry::new();
    tags.set_og("title", "a\"b<c>d&e'f");

    let rendered = tags.render();
    let start = rendered.find("content=\"").unwrap() + "content=\"".len();
    let end = rendered[start..].find('"').unwrap() + start;
    let value = &rendered[start..end];
    for special in ['"', '<', '>', '\''] {
        assert!(!value.contains(special), "raw {} in {}", special, value);
    }
    assert_eq!(value, "a&quot;b&lt;c&gt;d&amp;e&#039;f");
}

#[test]
fn test_providers_subset() {
    let mut tags = TagRegistry::new();
    tags.set_title("T", &[Provider::Twitter])
        .set_description("D", &[Provider::Og, Provider::Meta]);

    assert_eq!(
        tags.render(),
        "<meta name=\"description\" content=\"D\">\n\
         <meta name=\"og:description\" content=\"D\">\n\
         <meta name=\"twitter:title\" content=\"T\">\n"
    );
}

#[test]
fn test_render_twice_is_identical() {
    let mut tags = TagRegistry::new();
    tags.set_title("Home", &[])
        .add_json_ld(json!({"url": "https://example.com/"}));

    assert_eq!(tags.render(), tags.render());
}

#[test]
fn test_registries_are_independent() {
    let mut first = TagRegistry::new();
    first.set_title("First", &[]);

    let mut second = first.clone();
    second.set_title("Second", &[]);

    assert_eq!(first.get_meta_value("title", None), Some("First"));
    assert_eq!(second.get_meta_value("title", None), Some("Second"));
}
