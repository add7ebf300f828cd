//! Error types for metatags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metatags
#[derive(Debug, Error)]
pub enum MetaTagsError {
    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Manifest already exists: {0}")]
    ManifestExists(PathBuf),

    #[error("No closing </head> tag in {0}")]
    HeadNotFound(PathBuf),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MetaTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MetaTagsError::ManifestNotFound(_) => 2,
            MetaTagsError::HeadNotFound(_) => 3,
            MetaTagsError::KeyNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MetaTagsError::ManifestNotFound(path) => {
                format!(
                    "Manifest not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'metatags init' to create a starter metatags.toml\n\
                    • Pass a manifest explicitly with --manifest <PATH>\n\
                    • Set METATAGS_MANIFEST environment variable to your manifest path",
                    path.display()
                )
            }
            MetaTagsError::ManifestExists(path) => {
                format!(
                    "Manifest already exists: {}\n\n\
                    Edit the existing file or remove it before running 'metatags init' again",
                    path.display()
                )
            }
            MetaTagsError::HeadNotFound(path) => {
                format!(
                    "No closing </head> tag in {}\n\n\
                    Suggestions:\n\
                    • Check that the file is an HTML page with a <head> section\n\
                    • Use 'metatags render' to print the tags and insert them manually",
                    path.display()
                )
            }
            MetaTagsError::UnknownProvider(name) => {
                format!(
                    "Unknown provider: '{}'\n\n\
                    Valid providers: meta, og, twitter",
                    name
                )
            }
            MetaTagsError::UnknownNamespace(name) => {
                format!(
                    "Unknown namespace: '{}'\n\n\
                    Valid namespaces: meta, og, twitter\n\
                    Example: metatags get og title",
                    name
                )
            }
            MetaTagsError::KeyNotFound(key) => {
                format!(
                    "Key not found: '{}'\n\n\
                    Use 'metatags render' to see every tag the manifest produces",
                    key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MetaTagsError
pub type Result<T> = std::result::Result<T, MetaTagsError>;
