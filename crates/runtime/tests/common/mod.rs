#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::broadcast;
use tracker_content::TrackerContent;
use tracker_core::{ContainerId, ItemId, ItemSlot, VarbitId};
use tracker_runtime::{
    GameState, HostEvent, MemoryHost, OracleManager, TrackerEvent, TrackerSession,
};

pub const AIR: ItemId = ItemId(556);
pub const NATURE: ItemId = ItemId(561);
pub const LAW: ItemId = ItemId(563);
pub const COINS: ItemId = ItemId(995);
pub const RUNE_POUCH: ItemId = ItemId(12791);

pub const POUCH_TYPE_1: VarbitId = VarbitId(29);
pub const POUCH_TYPE_2: VarbitId = VarbitId(1622);
pub const POUCH_QTY_1: VarbitId = VarbitId(1624);
pub const POUCH_QTY_2: VarbitId = VarbitId(1625);

pub struct Harness {
    pub host: Arc<MemoryHost>,
    pub session: TrackerSession,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_content(TrackerContent::embedded().expect("embedded content"))
    }

    pub fn with_content(content: TrackerContent) -> Self {
        let host = Arc::new(MemoryHost::new());
        let session = TrackerSession::new(content, OracleManager::from_host(host.clone()));
        Self { host, session }
    }

    pub fn set_inventory(&self, items: &[(ItemId, i32)]) {
        let slots = items
            .iter()
            .map(|(id, qty)| {
                let raw = i32::try_from(id.get()).expect("item id fits the host range");
                ItemSlot::new(raw, *qty)
            })
            .collect();
        self.host.set_container(ContainerId::INVENTORY, slots);
    }

    /// Sets the inventory and delivers the matching container notification.
    pub fn inventory(&mut self, items: &[(ItemId, i32)]) -> Vec<TrackerEvent> {
        self.set_inventory(items);
        self.dispatch(HostEvent::ItemContainerChanged {
            container: ContainerId::INVENTORY,
        })
    }

    pub fn varbit(&mut self, varbit: VarbitId, value: i32) -> Vec<TrackerEvent> {
        self.host.set_varbit(varbit, value);
        self.dispatch(HostEvent::VarbitChanged { varbit })
    }

    pub fn login(&mut self) -> Vec<TrackerEvent> {
        self.dispatch(HostEvent::GameStateChanged {
            state: GameState::LoggedIn,
        })
    }

    pub fn dispatch(&mut self, event: HostEvent) -> Vec<TrackerEvent> {
        self.session.dispatch(&event).expect("dispatch succeeds")
    }

    pub fn crafted(&self, item: ItemId) -> u64 {
        self.session
            .registry()
            .get(item)
            .map(|tracked| tracked.crafted)
            .unwrap_or(0)
    }

    pub fn baseline_quantity(&self, item: ItemId) -> Option<u64> {
        self.session
            .state()
            .engine
            .baseline()
            .map(|baseline| baseline.quantity(item))
    }
}

pub fn drain(receiver: &mut broadcast::Receiver<TrackerEvent>) -> Vec<TrackerEvent> {
    std::iter::from_fn(|| receiver.try_recv().ok()).collect()
}
