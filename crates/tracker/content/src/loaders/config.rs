//! Tracker configuration loader.

use std::path::Path;

use tracker_core::TrackerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for tracker configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    const EMBEDDED: &'static str = include_str!("../../data/config.toml");

    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`TrackerConfig::default`].
    pub fn load(path: &Path) -> LoadResult<TrackerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<TrackerConfig> {
        toml::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }

    /// The configuration bundled with the crate.
    pub fn embedded() -> LoadResult<TrackerConfig> {
        Self::parse(Self::EMBEDDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::{ContainerId, Skill, VarbitId};

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ConfigLoader::embedded().unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("literal_threshold = 1000").unwrap();

        assert_eq!(config.literal_threshold, 1000);
        assert_eq!(config.host.inventory_container, ContainerId::INVENTORY);
        assert_eq!(config.host.crafting_skill, Skill::Runecraft);
    }

    #[test]
    fn three_slot_host() {
        let source = r#"
            [host]
            pouch_type_varbits = [29, 1622, 1623]
            pouch_quantity_varbits = [1624, 1625, 1626]
        "#;
        let config = ConfigLoader::parse(source).unwrap();
        assert_eq!(config.host.pouch_type_varbits.len(), 3);
        assert_eq!(config.host.pouch_quantity_varbits[2], VarbitId(1626));
    }

    #[test]
    fn rejects_unknown_skill() {
        let err = ConfigLoader::parse("[host]\ncrafting_skill = \"sailing\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
