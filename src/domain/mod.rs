//! Domain layer - Tag model, registry and rendering

pub mod attributes;
pub mod provider;
pub mod registry;
pub mod render;
pub mod tag;

pub use attributes::Attributes;
pub use provider::Provider;
pub use registry::TagRegistry;
pub use tag::{LinkEntry, TagEntry};
