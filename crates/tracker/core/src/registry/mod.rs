//! Running crafted totals per tracked item.
//!
//! The registry is the only state the presentation layer reads. It is created
//! from the [`ItemCatalog`] with one entry per tracked item, in catalog order,
//! and only two things mutate it: deltas applied by the tracker and an
//! explicit [`reset`](TrackedItemRegistry::reset).
mod error;

use crate::env::{ItemCatalog, ItemId, PriceOracle};
use crate::inventory::ItemDeltas;

pub use error::RegistryError;

/// One tracked item and its running totals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedItem {
    pub id: ItemId,
    pub name: String,
    /// Units crafted since the last reset. Never decreases otherwise.
    pub crafted: u64,
    /// Most recent positive unit price; zero until one is known.
    pub unit_value: u64,
    /// Set on the first recorded delta, cleared by reset.
    pub visible: bool,
}

impl TrackedItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            crafted: 0,
            unit_value: 0,
            visible: false,
        }
    }

    pub fn value(&self) -> u64 {
        self.crafted.saturating_mul(self.unit_value)
    }

    /// Refreshes `unit_value` from `prices`. Returns true if it was updated.
    fn reprice(&mut self, prices: &dyn PriceOracle) -> bool {
        match u64::try_from(prices.unit_price(self.id)) {
            Ok(price) if price > 0 => {
                self.unit_value = price;
                true
            }
            _ => false,
        }
    }
}

/// Result of applying a single delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied {
        item: ItemId,
        delta: u64,
        crafted: u64,
        repriced: bool,
    },
    /// The item is not tracked; nothing changed.
    Untracked(ItemId),
}

/// Presentation view of the registry: ordered rows plus the total value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrySnapshot {
    pub rows: Vec<TrackedItem>,
    pub total_value: u64,
}

impl RegistrySnapshot {
    /// Rows that have recorded at least one delta since the last reset.
    pub fn visible_rows(&self) -> impl Iterator<Item = &TrackedItem> + '_ {
        self.rows.iter().filter(|row| row.visible)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackedItemRegistry {
    items: Vec<TrackedItem>,
}

impl TrackedItemRegistry {
    /// Creates one zeroed entry per tracked item in `catalog`.
    pub fn from_catalog(catalog: &ItemCatalog) -> Self {
        Self {
            items: catalog
                .tracked()
                .iter()
                .map(|spec| TrackedItem::new(spec.id, spec.name.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TrackedItem] {
        &self.items
    }

    pub fn get(&self, item: ItemId) -> Option<&TrackedItem> {
        self.items.iter().find(|tracked| tracked.id == item)
    }

    /// Adds `delta` to the crafted count of `item`.
    ///
    /// Untracked items are reported as [`ApplyOutcome::Untracked`], not as an
    /// error. On success the item becomes visible and its price is refreshed
    /// when `prices` knows one.
    pub fn apply(
        &mut self,
        item: ItemId,
        delta: u64,
        prices: &dyn PriceOracle,
    ) -> Result<ApplyOutcome, RegistryError> {
        if delta == 0 {
            return Err(RegistryError::ZeroDelta(item));
        }
        let Some(tracked) = self.items.iter_mut().find(|tracked| tracked.id == item) else {
            return Ok(ApplyOutcome::Untracked(item));
        };

        let crafted = tracked
            .crafted
            .checked_add(delta)
            .ok_or(RegistryError::CounterOverflow {
                item,
                crafted: tracked.crafted,
                delta,
            })?;

        tracked.crafted = crafted;
        tracked.visible = true;
        let repriced = tracked.reprice(prices);

        Ok(ApplyOutcome::Applied {
            item,
            delta,
            crafted,
            repriced,
        })
    }

    /// Applies every delta or none of them.
    ///
    /// Deltas are applied to a staged copy that replaces `self` only when all
    /// of them succeed.
    pub fn apply_batch(
        &mut self,
        deltas: &ItemDeltas,
        prices: &dyn PriceOracle,
    ) -> Result<Vec<ApplyOutcome>, RegistryError> {
        let mut staged = self.clone();
        let outcomes = deltas
            .iter()
            .map(|(item, delta)| staged.apply(*item, *delta, prices))
            .collect::<Result<Vec<_>, _>>()?;
        *self = staged;
        Ok(outcomes)
    }

    /// Refreshes every price `prices` knows. Returns how many were updated.
    pub fn refresh_prices(&mut self, prices: &dyn PriceOracle) -> usize {
        self.items
            .iter_mut()
            .map(|tracked| tracked.reprice(prices))
            .filter(|repriced| *repriced)
            .count()
    }

    /// Zeroes every crafted count and hides every row. Prices are kept.
    pub fn reset(&mut self) {
        for tracked in &mut self.items {
            tracked.crafted = 0;
            tracked.visible = false;
        }
    }

    /// Sum of `crafted * unit_value` over all items.
    pub fn total_value(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, tracked| total.saturating_add(tracked.value()))
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            rows: self.items.clone(),
            total_value: self.total_value(),
        }
    }
}
