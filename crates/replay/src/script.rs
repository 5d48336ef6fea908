//! Notification scripts.
//!
//! A script seeds prices, then runs steps in order. Steps that change host
//! data also deliver the notification the host would send for it.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use tracker_core::{ItemId, ItemSlot, Skill, VarbitId};
use tracker_runtime::{GameState, HostEvent, MemoryHost, TrackerEvent, TrackerSession};

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub prices: BTreeMap<ItemId, i64>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub enum Step {
    /// Client state change.
    GameState(GameState),
    /// Replace the inventory and notify.
    Inventory(Vec<(ItemId, i32)>),
    /// Experience drop in `skill`.
    Stat(Skill),
    /// Set one varbit and notify.
    Varbit(VarbitId, i32),
    /// Set every pouch slot as `(type, quantity)` and notify once.
    /// Slots not listed are cleared.
    Pouch(Vec<(i32, i32)>),
    /// Change a price without notifying.
    Price(ItemId, i64),
    /// Presentation reset command.
    Reset,
    /// Rebaseline the inventory.
    Resync,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))
    }

    pub fn apply_prices(&self, host: &MemoryHost) {
        for (item, price) in &self.prices {
            host.set_price(*item, *price);
        }
    }

    /// Runs every step and returns the events published along the way.
    ///
    /// A failed notification is logged by the session and skipped.
    pub fn run(&self, session: &mut TrackerSession, host: &MemoryHost) -> Vec<TrackerEvent> {
        let mut published = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = index, "{:?}", step);
            let event = match step.prepare(session, host) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(step = index, "Step skipped: {:#}", err);
                    continue;
                }
            };
            match session.dispatch(&event) {
                Ok(events) => published.extend(events),
                Err(err) => tracing::warn!(step = index, "Step skipped: {}", err),
            }
        }
        published
    }
}

impl Step {
    /// Applies the step's host-side effect and returns the notification to
    /// deliver, if any.
    fn prepare(
        &self,
        session: &mut TrackerSession,
        host: &MemoryHost,
    ) -> Result<Option<HostEvent>> {
        let config = session.content().config.host.clone();
        let event = match self {
            Step::GameState(state) => Some(HostEvent::GameStateChanged { state: *state }),
            Step::Inventory(items) => {
                let slots = items
                    .iter()
                    .map(|(id, quantity)| {
                        let raw = i32::try_from(id.get())
                            .with_context(|| format!("Item id {} exceeds the host range", id))?;
                        Ok(ItemSlot::new(raw, *quantity))
                    })
                    .collect::<Result<Vec<_>>>()?;
                host.set_container(config.inventory_container, slots);
                Some(HostEvent::ItemContainerChanged {
                    container: config.inventory_container,
                })
            }
            Step::Stat(skill) => Some(HostEvent::StatChanged { skill: *skill }),
            Step::Varbit(varbit, value) => {
                host.set_varbit(*varbit, *value);
                Some(HostEvent::VarbitChanged { varbit: *varbit })
            }
            Step::Pouch(slots) => {
                let mut first = None;
                for (index, (type_varbit, quantity_varbit)) in
                    config.pouch_slot_varbits().enumerate()
                {
                    let (type_code, quantity) = slots.get(index).copied().unwrap_or((0, 0));
                    host.set_varbit(type_varbit, type_code);
                    host.set_varbit(quantity_varbit, quantity);
                    first.get_or_insert(type_varbit);
                }
                first.map(|varbit| HostEvent::VarbitChanged { varbit })
            }
            Step::Price(item, price) => {
                host.set_price(*item, *price);
                None
            }
            Step::Reset => Some(HostEvent::ResetRequested),
            Step::Resync => {
                if !session.resync_baseline() {
                    tracing::warn!("Resync ignored: no inventory loaded");
                }
                None
            }
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use tracker_content::TrackerContent;
    use tracker_runtime::OracleManager;

    fn session(host: &Arc<MemoryHost>) -> TrackerSession {
        TrackerSession::new(
            TrackerContent::embedded().unwrap(),
            OracleManager::from_host(host.clone()),
        )
    }

    #[test]
    fn parses_every_step_kind() {
        let script = Script::parse(
            r#"(
                prices: { 556: 5 },
                steps: [
                    GameState(LoggedIn),
                    Inventory([(556, 100)]),
                    Stat(runecraft),
                    Varbit(29, 1),
                    Pouch([(1, 100), (10, 5)]),
                    Price(563, 180),
                    Reset,
                    Resync,
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(script.prices[&ItemId(556)], 5);
        assert_eq!(script.steps.len(), 8);
        assert!(matches!(script.steps[2], Step::Stat(Skill::Runecraft)));
    }

    #[test]
    fn crafting_script_accumulates() {
        let host = Arc::new(MemoryHost::new());
        let script = Script::parse(
            r#"(
                steps: [
                    GameState(LoggedIn),
                    Inventory([(556, 100), (7936, 28)]),
                    Inventory([(556, 156)]),
                    Pouch([(1, 100), (10, 5)]),
                ],
            )"#,
        )
        .unwrap();
        let mut session = session(&host);

        let events = script.run(&mut session, &host);

        assert_eq!(session.registry().get(ItemId(556)).unwrap().crafted, 56);
        assert_eq!(session.pouch_summary(), "Air x100, Nature x5");
        assert!(events.iter().any(|event| matches!(
            event,
            TrackerEvent::PouchUpdated { .. }
        )));
    }

    #[test]
    fn resync_step_rebaselines() {
        let host = Arc::new(MemoryHost::new());
        let script = Script::parse(
            r#"(
                steps: [
                    Inventory([(556, 100)]),
                    Inventory([(556, 10)]),
                    Resync,
                    Inventory([(556, 30)]),
                ],
            )"#,
        )
        .unwrap();
        let mut session = session(&host);

        script.run(&mut session, &host);

        assert_eq!(session.registry().get(ItemId(556)).unwrap().crafted, 20);
    }

    #[test]
    fn out_of_range_item_id_skips_the_step() {
        let host = Arc::new(MemoryHost::new());
        let script = Script::parse(
            r#"(
                steps: [
                    Inventory([(556, 100)]),
                    Inventory([(556, 150), (4000000000, 1)]),
                    Inventory([(556, 120)]),
                ],
            )"#,
        )
        .unwrap();
        let mut session = session(&host);

        script.run(&mut session, &host);

        assert_eq!(session.registry().get(ItemId(556)).unwrap().crafted, 20);
    }

    #[test]
    fn loads_script_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.ron");
        std::fs::write(&path, "(prices: { 563: 180 }, steps: [Reset])").unwrap();

        let script = Script::load(&path).unwrap();
        assert_eq!(script.prices[&ItemId(563)], 180);
        assert!(matches!(script.steps[..], [Step::Reset]));

        let err = Script::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn rejects_unknown_step() {
        let err = Script::parse("(steps: [Bank])").unwrap_err();
        assert!(err.to_string().contains("Failed to parse script RON"));
    }
}
