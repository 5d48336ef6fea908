//! Rune pouch decoding.
//!
//! The host exposes the pouch as pairs of varbits, one `(type, quantity)` pair
//! per slot. Regular pouches use three slots and the divine pouch four; the
//! decoder accepts either. See [`decode`] for how type values are resolved.
mod decoder;
mod detector;

use arrayvec::ArrayVec;

use crate::config::TrackerConfig;
use crate::env::ItemId;

pub use decoder::{PouchPresence, decode, describe, detect_pouch, has_pouch};
pub use detector::{PouchChange, PouchChangeDetector};

/// Raw varbit values of one pouch slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PouchSlotRaw {
    pub type_code: i32,
    pub quantity: i32,
}

impl PouchSlotRaw {
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(type_code: i32, quantity: i32) -> Self {
        Self {
            type_code,
            quantity,
        }
    }

    /// A slot holds nothing unless both its type and quantity are positive.
    pub const fn is_empty(&self) -> bool {
        self.type_code <= 0 || self.quantity <= 0
    }

    /// Returns true if either varbit carries a value, which is enough to infer
    /// that a pouch exists.
    pub const fn has_signal(&self) -> bool {
        self.type_code > 0 || self.quantity > 0
    }
}

/// Slot values read from the host in slot order.
pub type PouchSlots = ArrayVec<PouchSlotRaw, { TrackerConfig::MAX_POUCH_SLOTS }>;

/// Decoded pouch contents: item to summed quantity.
///
/// Entries keep first-seen slot order for display. Equality ignores order.
#[derive(Clone, Debug, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PouchContents {
    entries: Vec<(ItemId, u64)>,
}

impl PouchContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the running total for `item`. Zero is ignored, so
    /// every entry holds a positive quantity.
    pub fn add(&mut self, item: ItemId, quantity: u64) {
        if quantity == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(id, _)| *id == item) {
            Some((_, total)) => *total = total.saturating_add(quantity),
            None => self.entries.push((item, quantity)),
        }
    }

    /// Quantity of `item`, zero when absent.
    pub fn quantity(&self, item: ItemId) -> u64 {
        self.entries
            .iter()
            .find(|(id, _)| *id == item)
            .map(|(_, qty)| *qty)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PouchContents {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(id, qty)| other.quantity(id) == qty)
    }
}

impl FromIterator<(ItemId, u64)> for PouchContents {
    fn from_iter<T: IntoIterator<Item = (ItemId, u64)>>(iter: T) -> Self {
        let mut contents = Self::new();
        for (id, qty) in iter {
            contents.add(id, qty);
        }
        contents
    }
}
