//! Handler priming the baseline on crafting experience drops.

use super::{EventHandler, HandlerContext};
use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::state::TrackerState;

/// Takes an inventory snapshot when crafting experience arrives and no
/// baseline exists yet.
///
/// Experience is granted on the same tick as the crafted items, often before
/// the inventory notification. Overwriting an existing baseline here would
/// erase the pre-craft state, so this handler only ever fills a gap.
#[derive(Debug, Clone, Copy)]
pub struct StatHandler;

impl EventHandler for StatHandler {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn handle(
        &self,
        event: &HostEvent,
        ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        let HostEvent::StatChanged { skill } = event else {
            return Ok(vec![]);
        };
        if *skill != ctx.config.host.crafting_skill {
            return Ok(vec![]);
        }

        let Some(observation) = ctx.observe_inventory() else {
            tracing::debug!("{} experience before the inventory loaded", skill);
            return Ok(vec![]);
        };
        if state.engine.prime(observation) {
            tracing::debug!("{} experience primed the inventory baseline", skill);
        }
        Ok(vec![])
    }
}
