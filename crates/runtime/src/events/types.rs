//! Events published for the presentation layer.

use serde::{Deserialize, Serialize};
use tracker_core::{ItemId, PouchContents, RegistrySnapshot};

use super::Topic;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerEvent {
    /// Full registry view after any change to crafted totals or prices.
    RegistryUpdated(RegistrySnapshot),

    /// A tracked item increased in a crafting notification.
    ItemsCrafted {
        item: ItemId,
        name: String,
        quantity: u64,
        crafted: u64,
    },

    /// The pouch contents changed.
    PouchUpdated {
        contents: PouchContents,
        /// Human-readable form, e.g. `"Air x100, Nature x5"`.
        summary: String,
    },

    /// The pouch is gone. Published once per disappearance.
    PouchRemoved,
}

impl TrackerEvent {
    pub fn topic(&self) -> Topic {
        match self {
            Self::RegistryUpdated(_) | Self::ItemsCrafted { .. } => Topic::Registry,
            Self::PouchUpdated { .. } | Self::PouchRemoved => Topic::Pouch,
        }
    }
}
