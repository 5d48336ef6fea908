//! Content factory for assembling tracker content from a data directory.

use std::path::{Path, PathBuf};

use tracker_core::{ItemCatalog, TrackerConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Catalog and configuration validated against each other.
#[derive(Debug, Clone)]
pub struct TrackerContent {
    pub catalog: ItemCatalog,
    pub config: TrackerConfig,
}

impl TrackerContent {
    /// Bundles content after checking the config can decode with the catalog's
    /// pouch table.
    pub fn new(catalog: ItemCatalog, config: TrackerConfig) -> LoadResult<Self> {
        config
            .validate(catalog.pouch_table())
            .map_err(|e| anyhow::anyhow!("Invalid tracker config: {}", e))?;
        Ok(Self { catalog, config })
    }

    /// The content bundled with the crate.
    pub fn embedded() -> LoadResult<Self> {
        Self::new(CatalogLoader::embedded()?, ConfigLoader::embedded()?)
    }
}

/// Content factory that loads tracker content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// └── config.toml
/// ```
///
/// Either file may be missing, in which case the embedded default is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the rune catalog from `catalog.ron`, or the embedded one.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("catalog.ron");
        if path.exists() {
            CatalogLoader::load(&path)
        } else {
            CatalogLoader::embedded()
        }
    }

    /// Load tracker configuration from `config.toml`, or the embedded one.
    pub fn load_config(&self) -> LoadResult<TrackerConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            ConfigLoader::embedded()
        }
    }

    /// Load and cross-validate catalog and configuration.
    pub fn load_content(&self) -> LoadResult<TrackerContent> {
        TrackerContent::new(self.load_catalog()?, self.load_config()?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
