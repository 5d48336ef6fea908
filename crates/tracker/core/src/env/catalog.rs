//! Fixed item configuration: tracked items, pouch lookup table, pouch variants.

use std::collections::HashSet;

use crate::error::{ErrorSeverity, TrackerError};

use super::ItemId;

/// A trackable item and its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedItemSpec {
    pub id: ItemId,
    pub name: String,
}

impl TrackedItemSpec {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 1-based lookup from pouch type index to item identifier.
///
/// Index `0` means "empty slot" on the host side and is never stored here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PouchTable {
    entries: Vec<ItemId>,
}

impl PouchTable {
    pub fn new(entries: Vec<ItemId>) -> Self {
        Self { entries }
    }

    /// Resolves a 1-based type index. Out-of-range indices resolve to `None`.
    pub fn resolve(&self, index: i32) -> Option<ItemId> {
        let zero_based = usize::try_from(index.checked_sub(1)?).ok()?;
        self.entries.get(zero_based).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ItemId] {
        &self.entries
    }
}

/// Errors raised while assembling an [`ItemCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog tracks no items")]
    NoTrackedItems,

    #[error("item id {0} is not a valid host identifier")]
    InvalidItemId(u32),

    #[error("item {0} is tracked more than once")]
    DuplicateTrackedItem(ItemId),

    #[error("pouch table entry {index} resolves to invalid item id 0")]
    InvalidPouchEntry { index: usize },
}

impl TrackerError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            NoTrackedItems => "CATALOG_NO_TRACKED_ITEMS",
            InvalidItemId(_) => "CATALOG_INVALID_ITEM_ID",
            DuplicateTrackedItem(_) => "CATALOG_DUPLICATE_TRACKED_ITEM",
            InvalidPouchEntry { .. } => "CATALOG_INVALID_POUCH_ENTRY",
        }
    }
}

/// Immutable item configuration injected into the tracker at construction.
///
/// Tracked items keep their declaration order; the registry and the
/// presentation rows follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCatalog {
    tracked: Vec<TrackedItemSpec>,
    tracked_ids: HashSet<ItemId>,
    pouch_table: PouchTable,
    pouch_items: HashSet<ItemId>,
}

impl ItemCatalog {
    /// Builds a validated catalog.
    pub fn new(
        tracked: Vec<TrackedItemSpec>,
        pouch_table: PouchTable,
        pouch_items: impl IntoIterator<Item = ItemId>,
    ) -> Result<Self, CatalogError> {
        if tracked.is_empty() {
            return Err(CatalogError::NoTrackedItems);
        }

        let mut tracked_ids = HashSet::with_capacity(tracked.len());
        for spec in &tracked {
            if spec.id.get() == 0 {
                return Err(CatalogError::InvalidItemId(0));
            }
            if !tracked_ids.insert(spec.id) {
                return Err(CatalogError::DuplicateTrackedItem(spec.id));
            }
        }

        if let Some(index) = pouch_table.entries().iter().position(|id| id.get() == 0) {
            return Err(CatalogError::InvalidPouchEntry { index: index + 1 });
        }

        let pouch_items = pouch_items
            .into_iter()
            .map(|id| {
                if id.get() == 0 {
                    Err(CatalogError::InvalidItemId(0))
                } else {
                    Ok(id)
                }
            })
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            tracked,
            tracked_ids,
            pouch_table,
            pouch_items,
        })
    }

    pub fn tracked(&self) -> &[TrackedItemSpec] {
        &self.tracked
    }

    pub fn is_tracked(&self, item: ItemId) -> bool {
        self.tracked_ids.contains(&item)
    }

    /// Display name of a tracked item.
    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.tracked
            .iter()
            .find(|spec| spec.id == item)
            .map(|spec| spec.name.as_str())
    }

    pub fn pouch_table(&self) -> &PouchTable {
        &self.pouch_table
    }

    /// Returns true if `item` is one of the rune pouch variants.
    pub fn is_pouch_item(&self, item: ItemId) -> bool {
        self.pouch_items.contains(&item)
    }
}
