//! Render use case
//!
//! Builds a registry from a manifest and produces the head markup.

use crate::domain::TagRegistry;
use crate::error::Result;
use crate::infrastructure::PageManifest;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Service for rendering a manifest's tags
pub struct RenderService {
    manifest: PageManifest,
}

impl RenderService {
    pub fn new(manifest: PageManifest) -> Self {
        RenderService { manifest }
    }

    /// Load the manifest at `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(RenderService::new(PageManifest::load(path)?))
    }

    /// Build the registry described by the manifest
    pub fn registry(&self) -> Result<TagRegistry> {
        self.manifest.to_registry()
    }

    pub fn render(&self) -> Result<String> {
        let markup = self.registry()?.render();
        debug!(bytes = markup.len(), "Rendered head markup");
        Ok(markup)
    }

    /// Render into a file, replacing its contents
    pub fn render_to(&self, output: &Path) -> Result<()> {
        let markup = self.render()?;
        fs::write(output, markup)?;
        info!(path = %output.display(), "Wrote head markup");
        Ok(())
    }
}
