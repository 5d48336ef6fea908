//! Handler decoding the rune pouch.

use tracker_core::{PouchChange, PouchContents, decode, describe, detect_pouch};

use super::{EventHandler, HandlerContext};
use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::state::TrackerState;

/// Re-decodes the pouch when one of its varbits changes.
///
/// Inventory changes are watched too: presence can also come from a pouch
/// item in the inventory, and that signal only moves with the inventory.
#[derive(Debug, Clone, Copy)]
pub struct PouchHandler;

impl EventHandler for PouchHandler {
    fn name(&self) -> &'static str {
        "pouch"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn handle(
        &self,
        event: &HostEvent,
        ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        let relevant = match event {
            HostEvent::VarbitChanged { varbit } => ctx.config.host.is_pouch_varbit(*varbit),
            HostEvent::ItemContainerChanged { container } => {
                *container == ctx.config.host.inventory_container
            }
            _ => false,
        };
        if !relevant {
            return Ok(vec![]);
        }

        Ok(refresh_pouch(ctx, state).into_iter().collect())
    }
}

/// Reads, decodes and diffs the pouch. Returns the event to publish, if any.
pub(super) fn refresh_pouch(
    ctx: &HandlerContext<'_>,
    state: &mut TrackerState,
) -> Option<TrackerEvent> {
    let slots = ctx.oracles.pouch_slots(&ctx.config.host);
    let inventory = ctx.oracles.container(ctx.config.host.inventory_container);

    let presence = detect_pouch(&slots, &inventory, ctx.catalog);
    let contents = match presence {
        Some(signal) => {
            tracing::trace!("Rune pouch detected via {:?}: {:?}", signal, slots);
            decode(
                &slots,
                ctx.catalog.pouch_table(),
                ctx.config.literal_threshold,
            )
        }
        None => PouchContents::new(),
    };

    match state.pouch.observe(presence.is_some(), contents) {
        PouchChange::Unchanged => None,
        PouchChange::Updated(contents) => {
            let summary = describe(&contents, ctx.catalog);
            tracing::debug!("Rune pouch read: {}", summary);
            Some(TrackerEvent::PouchUpdated { contents, summary })
        }
        PouchChange::Removed => {
            tracing::debug!("Rune pouch no longer present");
            Some(TrackerEvent::PouchRemoved)
        }
    }
}
