//! Infrastructure layer - Manifest files and discovery

pub mod manifest;

pub use manifest::{ImageSpec, LinkSpec, MetaSpec, PageManifest, MANIFEST_ENV, MANIFEST_FILE};
