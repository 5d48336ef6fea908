//! Host data adapters.
//!
//! [`OracleManager`] bundles the three `tracker-core` oracle traits behind
//! `Arc<dyn ...>` so handlers can read host data without knowing the concrete
//! host. [`MemoryHost`] is an in-memory host used by tests and replay tooling.
mod memory;

use std::sync::Arc;

use tracker_core::{
    ContainerId, HostConfig, InventoryOracle, ItemSlot, PouchSlotRaw, PouchSlots, PriceOracle,
    TrackerConfig, VarbitOracle,
};

pub use memory::MemoryHost;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    inventory: Arc<dyn InventoryOracle>,
    varbits: Arc<dyn VarbitOracle>,
    prices: Arc<dyn PriceOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        inventory: Arc<dyn InventoryOracle>,
        varbits: Arc<dyn VarbitOracle>,
        prices: Arc<dyn PriceOracle>,
    ) -> Self {
        Self {
            inventory,
            varbits,
            prices,
        }
    }

    /// Uses a single host object for every oracle.
    pub fn from_host<H>(host: Arc<H>) -> Self
    where
        H: InventoryOracle + VarbitOracle + PriceOracle + 'static,
    {
        Self {
            inventory: host.clone(),
            varbits: host.clone(),
            prices: host,
        }
    }

    pub fn prices(&self) -> &dyn PriceOracle {
        self.prices.as_ref()
    }

    /// Current slots of `container`; a missing container reads as empty.
    pub fn container(&self, container: ContainerId) -> Vec<ItemSlot> {
        self.loaded_container(container).unwrap_or_default()
    }

    /// Current slots of `container`, or `None` if the host has not loaded it.
    pub fn loaded_container(&self, container: ContainerId) -> Option<Vec<ItemSlot>> {
        self.inventory.item_container(container)
    }

    /// Reads every pouch slot's type and quantity varbits, in slot order.
    pub fn pouch_slots(&self, host: &HostConfig) -> PouchSlots {
        host.pouch_slot_varbits()
            .take(TrackerConfig::MAX_POUCH_SLOTS)
            .map(|(type_varbit, quantity_varbit)| {
                PouchSlotRaw::new(
                    self.varbits.varbit_value(type_varbit),
                    self.varbits.varbit_value(quantity_varbit),
                )
            })
            .collect()
    }
}
