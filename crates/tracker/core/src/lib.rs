//! Delta tracking and rune pouch decoding for a runecrafting tracker.
//!
//! `tracker-core` holds the pure, synchronous logic that turns successive
//! inventory observations into crafted totals and decodes the rune pouch from
//! its varbit slots. It performs no I/O and owns no global state: the host
//! adapter in `tracker-runtime` feeds observations in and reads registry
//! snapshots out.
pub mod config;
pub mod env;
pub mod error;
pub mod inventory;
pub mod pouch;
pub mod registry;

pub use config::{ConfigError, HostConfig, Skill, TrackerConfig};
pub use env::{
    CatalogError, ContainerId, InventoryOracle, ItemCatalog, ItemId, ItemSlot, NoPrices,
    PouchTable, PriceOracle, TrackedItemSpec, VarbitId, VarbitOracle,
};
pub use error::{ErrorSeverity, TrackerError};
pub use inventory::{
    Baseline, BaselineStatus, DeltaEngine, DeltaOutcome, InventoryObservation, ItemDeltas, diff,
};
pub use pouch::{
    PouchChange, PouchChangeDetector, PouchContents, PouchPresence, PouchSlotRaw, PouchSlots,
    decode, describe, detect_pouch, has_pouch,
};
pub use registry::{
    ApplyOutcome, RegistryError, RegistrySnapshot, TrackedItem, TrackedItemRegistry,
};
