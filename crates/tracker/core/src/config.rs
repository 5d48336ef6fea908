use crate::env::{ContainerId, PouchTable, VarbitId};
use crate::error::{ErrorSeverity, TrackerError};

/// Tracker configuration constants and host-specific handles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Pouch type values at or above this are literal item identifiers rather
    /// than 1-based table indices. Must exceed the pouch table length.
    pub literal_threshold: i32,

    /// Host handles the event handlers react to.
    pub host: HostConfig,
}

impl TrackerConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest pouch variant (divine pouch) has four slots.
    pub const MAX_POUCH_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LITERAL_THRESHOLD: i32 = 500;

    pub fn new() -> Self {
        Self {
            literal_threshold: Self::DEFAULT_LITERAL_THRESHOLD,
            host: HostConfig::default(),
        }
    }

    pub fn with_literal_threshold(literal_threshold: i32) -> Self {
        Self {
            literal_threshold,
            ..Self::new()
        }
    }

    /// Checks the configuration against the pouch table it will decode with.
    pub fn validate(&self, table: &PouchTable) -> Result<(), ConfigError> {
        let table_len = i32::try_from(table.len()).unwrap_or(i32::MAX);
        if self.literal_threshold <= table_len {
            return Err(ConfigError::ThresholdTooLow {
                threshold: self.literal_threshold,
                table_len: table.len(),
            });
        }

        let types = self.host.pouch_type_varbits.len();
        let quantities = self.host.pouch_quantity_varbits.len();
        if types != quantities {
            return Err(ConfigError::PouchSlotMismatch { types, quantities });
        }
        if types == 0 || types > Self::MAX_POUCH_SLOTS {
            return Err(ConfigError::PouchSlotCount {
                slots: types,
                max: Self::MAX_POUCH_SLOTS,
            });
        }

        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifiers the host uses for the containers, skills and varbits the
/// tracker listens to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostConfig {
    pub inventory_container: ContainerId,
    /// Skill whose experience drop primes the inventory baseline.
    pub crafting_skill: Skill,
    /// Pouch type varbits, one per slot, in slot order.
    pub pouch_type_varbits: Vec<VarbitId>,
    /// Pouch quantity varbits, aligned with `pouch_type_varbits`.
    pub pouch_quantity_varbits: Vec<VarbitId>,
}

impl HostConfig {
    pub const DEFAULT_POUCH_TYPE_VARBITS: [i32; 4] = [29, 1622, 1623, 14285];
    pub const DEFAULT_POUCH_QUANTITY_VARBITS: [i32; 4] = [1624, 1625, 1626, 14286];

    /// Returns true if `varbit` is one of the pouch type or quantity varbits.
    pub fn is_pouch_varbit(&self, varbit: VarbitId) -> bool {
        self.pouch_type_varbits.contains(&varbit) || self.pouch_quantity_varbits.contains(&varbit)
    }

    /// Iterates `(type, quantity)` varbit pairs in slot order.
    pub fn pouch_slot_varbits(&self) -> impl Iterator<Item = (VarbitId, VarbitId)> + '_ {
        self.pouch_type_varbits
            .iter()
            .copied()
            .zip(self.pouch_quantity_varbits.iter().copied())
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            inventory_container: ContainerId::INVENTORY,
            crafting_skill: Skill::Runecraft,
            pouch_type_varbits: Self::DEFAULT_POUCH_TYPE_VARBITS
                .into_iter()
                .map(VarbitId)
                .collect(),
            pouch_quantity_varbits: Self::DEFAULT_POUCH_QUANTITY_VARBITS
                .into_iter()
                .map(VarbitId)
                .collect(),
        }
    }
}

/// Player skills reported by stat change notifications.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    #[default]
    Runecraft,
    Hunter,
    Construction,
}

/// Errors raised when a [`TrackerConfig`] cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("literal threshold {threshold} does not exceed pouch table length {table_len}")]
    ThresholdTooLow { threshold: i32, table_len: usize },

    #[error("pouch has {types} type varbits but {quantities} quantity varbits")]
    PouchSlotMismatch { types: usize, quantities: usize },

    #[error("pouch slot count {slots} outside 1..={max}")]
    PouchSlotCount { slots: usize, max: usize },
}

impl TrackerError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            ThresholdTooLow { .. } => "CONFIG_THRESHOLD_TOO_LOW",
            PouchSlotMismatch { .. } => "CONFIG_POUCH_SLOT_MISMATCH",
            PouchSlotCount { .. } => "CONFIG_POUCH_SLOT_COUNT",
        }
    }
}
