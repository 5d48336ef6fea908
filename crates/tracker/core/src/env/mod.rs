//! Traits and types describing what the host exposes to the tracker.
//!
//! Oracles are read-only views over host data (inventory containers, varbits,
//! item prices). The [`ItemCatalog`] is the fixed configuration data injected
//! at construction: which items are tracked, how pouch indices map to items,
//! and which inventory items indicate a rune pouch.
mod catalog;
mod host;

pub use catalog::{CatalogError, ItemCatalog, PouchTable, TrackedItemSpec};
pub use host::{ContainerId, ItemId, ItemSlot, VarbitId};

/// Read access to the host's item containers.
pub trait InventoryOracle: Send + Sync {
    /// Returns the current slots of `container`, or `None` when the host has
    /// not loaded it. Callers treat `None` exactly like an empty container.
    fn item_container(&self, container: ContainerId) -> Option<Vec<ItemSlot>>;
}

/// Read access to the host's varbit values.
///
/// Values are read independently on every call; implementations must not cache.
pub trait VarbitOracle: Send + Sync {
    fn varbit_value(&self, varbit: VarbitId) -> i32;
}

/// Per-unit price lookup for an item.
pub trait PriceOracle: Send + Sync {
    /// Returns the unit price of `item`. Zero or negative means "unknown".
    fn unit_price(&self, item: ItemId) -> i64;
}

/// Price oracle that knows nothing; every lookup is "unknown".
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrices;

impl PriceOracle for NoPrices {
    fn unit_price(&self, _item: ItemId) -> i64 {
        0
    }
}
