//! In-memory host backed by hash maps.
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracker_core::{
    ContainerId, InventoryOracle, ItemId, ItemSlot, PriceOracle, VarbitId, VarbitOracle,
};

/// Host implementation with mutable in-memory data.
///
/// Setters take `&self` so a test (or the replay tool) can mutate the host
/// while a session holds it through an [`OracleManager`](super::OracleManager).
#[derive(Debug, Default)]
pub struct MemoryHost {
    containers: RwLock<HashMap<ContainerId, Vec<ItemSlot>>>,
    varbits: RwLock<HashMap<VarbitId, i32>>,
    prices: RwLock<HashMap<ItemId, i64>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of `container`.
    pub fn set_container(&self, container: ContainerId, slots: Vec<ItemSlot>) {
        self.containers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(container, slots);
    }

    /// Unloads `container`, as the host does before it is first opened.
    pub fn remove_container(&self, container: ContainerId) {
        self.containers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&container);
    }

    pub fn set_varbit(&self, varbit: VarbitId, value: i32) {
        self.varbits
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(varbit, value);
    }

    pub fn set_price(&self, item: ItemId, price: i64) {
        self.prices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(item, price);
    }
}

impl InventoryOracle for MemoryHost {
    fn item_container(&self, container: ContainerId) -> Option<Vec<ItemSlot>> {
        self.containers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&container)
            .cloned()
    }
}

impl VarbitOracle for MemoryHost {
    fn varbit_value(&self, varbit: VarbitId) -> i32 {
        self.varbits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&varbit)
            .copied()
            .unwrap_or(0)
    }
}

impl PriceOracle for MemoryHost {
    fn unit_price(&self, item: ItemId) -> i64 {
        self.prices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&item)
            .copied()
            .unwrap_or(0)
    }
}
