//! Rune catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracker_core::{ItemCatalog, ItemId, PouchTable, TrackedItemSpec};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub tracked: Vec<TrackedItemSpec>,
    pub pouch_table: PouchTable,
    #[serde(default)]
    pub pouch_items: Vec<ItemId>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> LoadResult<ItemCatalog> {
        ItemCatalog::new(self.tracked, self.pouch_table, self.pouch_items)
            .map_err(|e| anyhow::anyhow!("Invalid rune catalog: {}", e))
    }
}

/// Loader for the rune catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    const EMBEDDED: &'static str = include_str!("../../data/runes.ron");

    /// Load a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`CatalogFile`]
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from RON source.
    pub fn parse(source: &str) -> LoadResult<ItemCatalog> {
        let file: CatalogFile = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse rune catalog RON: {}", e))?;
        file.into_catalog()
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> LoadResult<ItemCatalog> {
        Self::parse(Self::EMBEDDED)
    }
}
