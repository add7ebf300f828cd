//! metatags - HTML head tag builder
//!
//! Collects `<meta>`, `<link>`, Open Graph, Twitter card and JSON-LD
//! declarations in a [`TagRegistry`] and renders them as markup for a page
//! head. Build one registry per page:
//!
//! ```
//! use metatags::{Provider, TagRegistry};
//!
//! let mut tags = TagRegistry::new();
//! tags.set_title("Home", &[])
//!     .set_description("Welcome", &[Provider::Meta])
//!     .set_canonical("https://example.com/");
//!
//! let html = tags.render();
//! assert!(html.starts_with("<title>Home</title>\n"));
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Attributes, LinkEntry, Provider, TagEntry, TagRegistry};
pub use error::MetaTagsError;
