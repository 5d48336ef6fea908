use crate::env::{ItemCatalog, ItemId, ItemSlot, PouchTable};

use super::{PouchContents, PouchSlotRaw};

/// Decodes raw pouch slots into summed contents.
///
/// Empty slots (type or quantity not positive) are skipped. A type value at or
/// above `literal_threshold` is the item identifier itself, as exposed by some
/// client builds; anything below it is a 1-based index into `table`. Indices
/// outside the table belong to runes the table does not know yet and are
/// skipped. Slots resolving to the same item are summed.
pub fn decode(slots: &[PouchSlotRaw], table: &PouchTable, literal_threshold: i32) -> PouchContents {
    let mut contents = PouchContents::new();
    for slot in slots {
        if slot.is_empty() {
            continue;
        }
        let Some(item) = resolve_type_code(slot.type_code, table, literal_threshold) else {
            continue;
        };
        // Positive i32 always fits.
        contents.add(item, slot.quantity.unsigned_abs().into());
    }
    contents
}

fn resolve_type_code(type_code: i32, table: &PouchTable, literal_threshold: i32) -> Option<ItemId> {
    if type_code >= literal_threshold {
        ItemId::from_raw(type_code)
    } else {
        table.resolve(type_code)
    }
}

/// Which signal revealed the pouch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PouchPresence {
    /// At least one slot varbit is non-zero.
    Varbits,
    /// A pouch item sits in the inventory.
    InventoryItem(ItemId),
}

/// Detects a rune pouch from either signal.
///
/// Varbits are checked first. Hosts differ in which of the two they surface,
/// so either one alone is trusted.
pub fn detect_pouch(
    slots: &[PouchSlotRaw],
    inventory: &[ItemSlot],
    catalog: &ItemCatalog,
) -> Option<PouchPresence> {
    if slots.iter().any(PouchSlotRaw::has_signal) {
        return Some(PouchPresence::Varbits);
    }

    inventory
        .iter()
        .filter_map(|slot| ItemId::from_raw(slot.id))
        .find(|id| catalog.is_pouch_item(*id))
        .map(PouchPresence::InventoryItem)
}

pub fn has_pouch(slots: &[PouchSlotRaw], inventory: &[ItemSlot], catalog: &ItemCatalog) -> bool {
    detect_pouch(slots, inventory, catalog).is_some()
}

/// Renders contents as `"Air x100, Nature x5"`, or `"(empty)"`.
///
/// Items without a catalog name fall back to their numeric identifier.
pub fn describe(contents: &PouchContents, catalog: &ItemCatalog) -> String {
    if contents.is_empty() {
        return "(empty)".to_string();
    }
    contents
        .iter()
        .map(|(id, qty)| match catalog.name(id) {
            Some(name) => format!("{name} x{qty}"),
            None => format!("{id} x{qty}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
