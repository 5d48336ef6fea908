//! Handlers adapting host notifications to the tracker core.
//!
//! Each handler pattern matches on the [`HostEvent`]s it cares about, mutates
//! the staged [`TrackerState`] and returns the [`TrackerEvent`]s to publish.
//! Handlers never publish themselves: the session does, after the whole
//! notification succeeded.

mod inventory;
mod login;
mod pouch;
mod reset;
mod stat;

pub use inventory::InventoryHandler;
pub use login::LoginHandler;
pub use pouch::PouchHandler;
pub use reset::ResetHandler;
pub use stat::StatHandler;

use tracker_core::{InventoryObservation, ItemCatalog, TrackerConfig};

use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::oracle::OracleManager;
use crate::state::TrackerState;

/// Read-only context provided to handlers.
pub struct HandlerContext<'a> {
    pub catalog: &'a ItemCatalog,
    pub config: &'a TrackerConfig,
    pub oracles: &'a OracleManager,
}

impl HandlerContext<'_> {
    /// Fresh observation of the player's inventory.
    ///
    /// `None` until the host has loaded the container. An unloaded inventory
    /// must never become a baseline: the first real observation would then
    /// report everything the player carries as crafted.
    pub fn observe_inventory(&self) -> Option<InventoryObservation> {
        self.oracles
            .loaded_container(self.config.host.inventory_container)
            .map(|slots| InventoryObservation::from_slots(&slots))
    }
}

/// Reacts to host notifications.
pub trait EventHandler: Send + Sync {
    /// Returns the handler name for logging and debugging.
    fn name(&self) -> &'static str;

    /// Returns execution priority (lower values execute first).
    ///
    /// Session handlers (login) run before inventory handlers, which run
    /// before pouch handlers, so a login's fresh baseline is in place before
    /// anything diffs against it.
    fn priority(&self) -> i32 {
        0
    }

    /// Handle one notification.
    ///
    /// Returns the events to publish. An error aborts the whole notification.
    fn handle(
        &self,
        event: &HostEvent,
        ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>>;
}

/// Default handler set in priority order.
pub fn default_handlers() -> Vec<Box<dyn EventHandler>> {
    let mut handlers: Vec<Box<dyn EventHandler>> = vec![
        Box::new(LoginHandler),
        Box::new(StatHandler),
        Box::new(InventoryHandler),
        Box::new(PouchHandler),
        Box::new(ResetHandler),
    ];
    handlers.sort_by_key(|handler| handler.priority());
    handlers
}
