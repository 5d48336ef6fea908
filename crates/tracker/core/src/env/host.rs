//! Identifier types for host-owned data.

use core::fmt;

/// Item identifier as used by the host's item database.
///
/// Valid identifiers are strictly positive; the host uses `-1` and `0` for
/// empty slots, which is why raw slots carry `i32` and convert through
/// [`ItemId::from_raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl ItemId {
    /// Converts a raw host identifier, rejecting zero and negative values.
    pub fn from_raw(raw: i32) -> Option<Self> {
        u32::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host handle for an item container (inventory, bank, equipment, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContainerId(pub i32);

impl ContainerId {
    /// The player's backpack.
    pub const INVENTORY: Self = Self(93);
}

/// Host handle for a varbit (a bitfield-packed client variable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VarbitId(pub i32);

/// One raw container slot as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub id: i32,
    pub quantity: i32,
}

impl ItemSlot {
    pub const fn new(id: i32, quantity: i32) -> Self {
        Self { id, quantity }
    }

    /// Returns the item and quantity if this slot holds a real stack.
    pub fn stack(&self) -> Option<(ItemId, u64)> {
        let id = ItemId::from_raw(self.id)?;
        let quantity = u64::try_from(self.quantity).ok().filter(|q| *q > 0)?;
        Some((id, quantity))
    }
}
