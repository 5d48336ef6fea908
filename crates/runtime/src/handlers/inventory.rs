//! Handler diffing the inventory against the baseline.

use tracker_core::{ApplyOutcome, BaselineStatus};

use super::{EventHandler, HandlerContext};
use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::state::TrackerState;

/// Turns inventory changes into crafted totals.
///
/// The first inventory seen only becomes the baseline. After that every
/// change is diffed against the baseline; tracked increases are applied to
/// the registry and advance the baseline, anything else leaves it in place.
#[derive(Debug, Clone, Copy)]
pub struct InventoryHandler;

impl EventHandler for InventoryHandler {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn handle(
        &self,
        event: &HostEvent,
        ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        let HostEvent::ItemContainerChanged { container } = event else {
            return Ok(vec![]);
        };
        if *container != ctx.config.host.inventory_container {
            return Ok(vec![]);
        }

        let Some(observation) = ctx.observe_inventory() else {
            tracing::debug!("Inventory notification with no container loaded");
            return Ok(vec![]);
        };
        let outcome = state.engine.evaluate(&observation, ctx.catalog);

        if !outcome.untracked.is_empty() {
            tracing::debug!("Untracked inventory increases: {:?}", outcome.untracked);
        }

        match outcome.status {
            BaselineStatus::Initialized => {
                tracing::debug!(
                    "First inventory observation ({} stacks) taken as baseline",
                    observation.len()
                );
            }
            BaselineStatus::Held => {
                tracing::trace!("No tracked increase, holding baseline");
            }
            BaselineStatus::Advanced => {}
        }

        let applied = state
            .registry
            .apply_batch(&outcome.tracked, ctx.oracles.prices())?;
        state.engine.commit(observation, &outcome);

        let mut events: Vec<TrackerEvent> = applied
            .into_iter()
            .filter_map(|result| match result {
                ApplyOutcome::Applied {
                    item,
                    delta,
                    crafted,
                    ..
                } => {
                    let name = ctx.catalog.name(item).unwrap_or_default().to_string();
                    tracing::info!("Crafted {} x{} (total {})", name, delta, crafted);
                    Some(TrackerEvent::ItemsCrafted {
                        item,
                        name,
                        quantity: delta,
                        crafted,
                    })
                }
                ApplyOutcome::Untracked(item) => {
                    tracing::debug!("Item {} is not in the registry", item);
                    None
                }
            })
            .collect();

        if !events.is_empty() {
            events.push(TrackerEvent::RegistryUpdated(state.registry.snapshot()));
        }
        Ok(events)
    }
}
