//! Handler for the presentation layer's reset command.

use super::{EventHandler, HandlerContext};
use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::state::TrackerState;

/// Zeroes all crafted counters and hides every row.
#[derive(Debug, Clone, Copy)]
pub struct ResetHandler;

impl EventHandler for ResetHandler {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn handle(
        &self,
        event: &HostEvent,
        _ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        if !matches!(event, HostEvent::ResetRequested) {
            return Ok(vec![]);
        }

        state.registry.reset();
        tracing::info!("Crafted totals reset");
        Ok(vec![TrackerEvent::RegistryUpdated(state.registry.snapshot())])
    }
}
