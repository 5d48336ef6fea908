//! Handler for login and session changes.

use tracker_core::TrackedItemRegistry;

use super::pouch::refresh_pouch;
use super::{EventHandler, HandlerContext};
use crate::error::Result;
use crate::events::{HostEvent, TrackerEvent};
use crate::state::TrackerState;

/// Starts a tracking session when the client logs in.
///
/// On the transition into a logged-in session the registry is created if
/// missing and priced, the inventory baseline is replaced with a fresh
/// snapshot and the pouch is republished. Region loads inside a session are
/// not transitions.
#[derive(Debug, Clone, Copy)]
pub struct LoginHandler;

impl EventHandler for LoginHandler {
    fn name(&self) -> &'static str {
        "login"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn handle(
        &self,
        event: &HostEvent,
        ctx: &HandlerContext<'_>,
        state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        let HostEvent::GameStateChanged { state: game_state } = event else {
            return Ok(vec![]);
        };

        let active = game_state.is_session_active();
        let was_active = std::mem::replace(&mut state.logged_in, active);
        if !active || was_active {
            return Ok(vec![]);
        }

        if state.registry.is_empty() {
            state.registry = TrackedItemRegistry::from_catalog(ctx.catalog);
        }
        let priced = state.registry.refresh_prices(ctx.oracles.prices());

        match ctx.observe_inventory() {
            Some(observation) => {
                tracing::info!(
                    "Session started: {} tracked items ({} priced), baseline of {} stacks",
                    state.registry.items().len(),
                    priced,
                    observation.len()
                );
                state.engine.rebaseline(observation);
            }
            None => {
                // The first inventory notification will take the baseline.
                tracing::info!(
                    "Session started: {} tracked items ({} priced), inventory not loaded yet",
                    state.registry.items().len(),
                    priced
                );
                state.engine.clear();
            }
        }

        state.pouch.reset();
        let mut events = vec![TrackerEvent::RegistryUpdated(state.registry.snapshot())];
        events.extend(refresh_pouch(ctx, state));
        Ok(events)
    }
}
