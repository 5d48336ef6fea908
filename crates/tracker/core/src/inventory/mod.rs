//! Inventory observations and the baseline they are diffed against.
//!
//! An observation is a bag: item identifier to total quantity, with absence
//! meaning zero. Observations are built fresh from the host's raw slots on
//! every notification and never mutated afterwards; the [`Baseline`] is just
//! the observation the [`DeltaEngine`] last committed, replaced wholesale.
mod delta;

use std::collections::BTreeMap;

use crate::env::{ItemId, ItemSlot};

pub use delta::{BaselineStatus, DeltaEngine, DeltaOutcome, ItemDeltas, diff};

/// One complete read of a container's `(item, quantity)` contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryObservation {
    items: BTreeMap<ItemId, u64>,
}

impl InventoryObservation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an observation from raw host slots.
    ///
    /// Slots with a non-positive identifier or quantity are discarded; stacks
    /// of the same item in different slots are summed.
    pub fn from_slots(slots: &[ItemSlot]) -> Self {
        slots.iter().filter_map(ItemSlot::stack).collect()
    }

    /// Quantity held of `item`, zero when absent.
    pub fn quantity(&self, item: ItemId) -> u64 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains_key(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.items.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemId, u64)> for InventoryObservation {
    fn from_iter<T: IntoIterator<Item = (ItemId, u64)>>(iter: T) -> Self {
        let mut items = BTreeMap::new();
        for (id, quantity) in iter {
            if quantity == 0 {
                continue;
            }
            let entry = items.entry(id).or_insert(0u64);
            *entry = entry.saturating_add(quantity);
        }
        Self { items }
    }
}

/// The observation most recently committed by the [`DeltaEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Baseline(InventoryObservation);

impl Baseline {
    pub fn capture(observation: InventoryObservation) -> Self {
        Self(observation)
    }

    pub fn observation(&self) -> &InventoryObservation {
        &self.0
    }

    pub fn quantity(&self, item: ItemId) -> u64 {
        self.0.quantity(item)
    }
}
