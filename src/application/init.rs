//! Initialize manifest use case

use crate::error::{MetaTagsError, Result};
use crate::infrastructure::{PageManifest, MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a starter `metatags.toml` into `dir`, returning its path.
pub fn init(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        return Err(MetaTagsError::ManifestExists(path));
    }

    PageManifest::starter().save(&path)?;
    info!(path = %path.display(), "Created manifest");

    Ok(path)
}
