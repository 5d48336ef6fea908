//! Fixed configuration data and loaders for the runecrafting tracker.
//!
//! This crate houses the reference rune catalog and host constants, embedded
//! from `data/`, and provides loaders for RON/TOML overrides:
//! - Rune catalog: tracked runes, pouch index table, pouch variants (RON)
//! - Tracker configuration: literal threshold, host handles (TOML)
//!
//! Content is injected into the tracker at construction and never mutated.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, TrackerContent,
};
