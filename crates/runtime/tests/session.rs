//! End-to-end crafting scenarios driven through `TrackerSession`.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::*;
use tracker_core::{RegistryError, Skill};
use tracker_runtime::{
    EventHandler, GameState, HandlerContext, HostEvent, MemoryHost, OracleManager, Result,
    RuntimeError, Topic, TrackerEvent, TrackerSession, TrackerState, default_handlers,
};

#[test]
fn first_observation_only_takes_baseline() {
    let mut harness = Harness::new();

    let events = harness.inventory(&[(AIR, 100)]);

    assert!(events.is_empty());
    assert_eq!(harness.crafted(AIR), 0);
    assert_eq!(harness.baseline_quantity(AIR), Some(100));
}

#[test]
fn tracked_increase_is_recorded_and_advances_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);

    let events = harness.inventory(&[(AIR, 150)]);

    assert_eq!(
        events[0],
        TrackerEvent::ItemsCrafted {
            item: AIR,
            name: "Air".to_string(),
            quantity: 50,
            crafted: 50,
        }
    );
    let TrackerEvent::RegistryUpdated(snapshot) = &events[1] else {
        panic!("expected registry update, got {:?}", events[1]);
    };
    let air: Vec<_> = snapshot.visible_rows().collect();
    assert_eq!(air.len(), 1);
    assert_eq!(air[0].crafted, 50);

    assert_eq!(harness.crafted(AIR), 50);
    assert!(harness.session.registry().get(AIR).unwrap().visible);
    assert_eq!(harness.baseline_quantity(AIR), Some(150));
}

#[test]
fn untracked_increase_holds_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness.inventory(&[(AIR, 150)]);

    let events = harness.inventory(&[(AIR, 150), (COINS, 10)]);

    assert!(events.is_empty());
    assert_eq!(harness.baseline_quantity(AIR), Some(150));
    assert_eq!(harness.baseline_quantity(COINS), Some(0));

    // Still diffed against the held baseline.
    harness.inventory(&[(AIR, 170), (COINS, 10)]);
    assert_eq!(harness.crafted(AIR), 70);
    assert_eq!(harness.baseline_quantity(COINS), Some(10));
}

#[test]
fn decrease_does_not_move_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);

    assert!(harness.inventory(&[(AIR, 40)]).is_empty());
    assert_eq!(harness.baseline_quantity(AIR), Some(100));

    harness.inventory(&[(AIR, 120)]);
    assert_eq!(harness.crafted(AIR), 20);
}

#[test]
fn resync_replaces_a_stale_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness.inventory(&[(AIR, 40)]);

    assert!(harness.session.resync_baseline());
    assert_eq!(harness.baseline_quantity(AIR), Some(40));

    harness.inventory(&[(AIR, 55)]);
    assert_eq!(harness.crafted(AIR), 15);
}

#[test]
fn resync_without_loaded_inventory_keeps_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness
        .host
        .remove_container(tracker_core::ContainerId::INVENTORY);

    assert!(!harness.session.resync_baseline());
    assert_eq!(harness.baseline_quantity(AIR), Some(100));
}

#[test]
fn other_containers_are_ignored() {
    let mut harness = Harness::new();
    harness.set_inventory(&[(AIR, 100)]);

    let events = harness.dispatch(HostEvent::ItemContainerChanged {
        container: tracker_core::ContainerId(95),
    });

    assert!(events.is_empty());
    assert!(!harness.session.state().engine.has_baseline());
}

#[test]
fn crafting_experience_primes_missing_baseline() {
    let mut harness = Harness::new();
    harness.set_inventory(&[(AIR, 100)]);

    harness.dispatch(HostEvent::StatChanged {
        skill: Skill::Runecraft,
    });
    assert_eq!(harness.baseline_quantity(AIR), Some(100));

    harness.inventory(&[(AIR, 120)]);
    assert_eq!(harness.crafted(AIR), 20);
}

#[test]
fn crafting_experience_never_overwrites_baseline() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);

    // Experience lands on the same tick as the runes, before the inventory event.
    harness.set_inventory(&[(AIR, 130)]);
    harness.dispatch(HostEvent::StatChanged {
        skill: Skill::Runecraft,
    });
    assert_eq!(harness.baseline_quantity(AIR), Some(100));

    harness.dispatch(HostEvent::ItemContainerChanged {
        container: tracker_core::ContainerId::INVENTORY,
    });
    assert_eq!(harness.crafted(AIR), 30);
}

#[test]
fn experience_before_inventory_loads_does_not_prime() {
    let mut harness = Harness::new();

    harness.dispatch(HostEvent::StatChanged {
        skill: Skill::Runecraft,
    });
    assert!(!harness.session.state().engine.has_baseline());

    // The first loaded inventory is a baseline, not a craft.
    assert!(harness.inventory(&[(LAW, 500)]).is_empty());
    assert_eq!(harness.crafted(LAW), 0);
}

#[test]
fn other_skills_do_not_prime() {
    let mut harness = Harness::new();
    harness.set_inventory(&[(AIR, 100)]);

    harness.dispatch(HostEvent::StatChanged {
        skill: Skill::Magic,
    });

    assert!(!harness.session.state().engine.has_baseline());
}

#[test]
fn login_rebaselines_and_publishes_registry() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness.set_inventory(&[(AIR, 500)]);

    let events = harness.login();

    assert!(matches!(events[0], TrackerEvent::RegistryUpdated(_)));
    assert!(harness.session.state().logged_in);
    assert_eq!(harness.baseline_quantity(AIR), Some(500));
    assert_eq!(harness.crafted(AIR), 0);
}

#[test]
fn region_load_keeps_session() {
    let mut harness = Harness::new();
    harness.set_inventory(&[(AIR, 100)]);
    harness.login();

    harness.set_inventory(&[(AIR, 130)]);
    let events = harness.dispatch(HostEvent::GameStateChanged {
        state: GameState::Loading,
    });
    assert!(events.is_empty());
    harness.login();
    assert_eq!(harness.baseline_quantity(AIR), Some(100));

    harness.dispatch(HostEvent::ItemContainerChanged {
        container: tracker_core::ContainerId::INVENTORY,
    });
    assert_eq!(harness.crafted(AIR), 30);
}

#[test]
fn login_before_inventory_loads_waits_for_first_observation() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness
        .host
        .remove_container(tracker_core::ContainerId::INVENTORY);

    harness.login();
    assert!(!harness.session.state().engine.has_baseline());

    let events = harness.inventory(&[(LAW, 500), (AIR, 1000)]);
    assert!(events.is_empty());
    assert_eq!(harness.crafted(LAW), 0);
    assert_eq!(harness.crafted(AIR), 0);
    assert_eq!(harness.baseline_quantity(LAW), Some(500));

    harness.inventory(&[(LAW, 510), (AIR, 1000)]);
    assert_eq!(harness.crafted(LAW), 10);
}

#[test]
fn relogin_keeps_crafted_totals() {
    let mut harness = Harness::new();
    harness.set_inventory(&[]);
    harness.login();
    harness.inventory(&[(LAW, 10)]);
    assert_eq!(harness.crafted(LAW), 10);

    harness.dispatch(HostEvent::GameStateChanged {
        state: GameState::LoginScreen,
    });
    assert!(!harness.session.state().logged_in);

    harness.set_inventory(&[(LAW, 25)]);
    harness.login();
    assert_eq!(harness.crafted(LAW), 10);
    assert_eq!(harness.baseline_quantity(LAW), Some(25));
}

#[test]
fn prices_are_known_before_the_first_craft() {
    let host = Arc::new(MemoryHost::new());
    host.set_price(AIR, 5);
    host.set_price(LAW, 180);
    let content = tracker_content::TrackerContent::embedded().unwrap();
    let mut session = TrackerSession::new(content, OracleManager::from_host(host.clone()));

    assert_eq!(session.registry().get(LAW).unwrap().unit_value, 180);

    let inventory = tracker_core::ContainerId::INVENTORY;
    host.set_container(inventory, vec![tracker_core::ItemSlot::new(556, 10)]);
    session
        .dispatch(&HostEvent::ItemContainerChanged {
            container: inventory,
        })
        .unwrap();
    host.set_container(
        inventory,
        vec![
            tracker_core::ItemSlot::new(556, 110),
            tracker_core::ItemSlot::new(563, 2),
        ],
    );
    session
        .dispatch(&HostEvent::ItemContainerChanged {
            container: inventory,
        })
        .unwrap();

    assert_eq!(session.snapshot().total_value, 100 * 5 + 2 * 180);
}

#[test]
fn reset_zeroes_totals() {
    let mut harness = Harness::new();
    harness.inventory(&[(AIR, 100)]);
    harness.inventory(&[(AIR, 150), (NATURE, 3)]);

    let events = harness.session.reset().unwrap();

    let [TrackerEvent::RegistryUpdated(snapshot)] = events.as_slice() else {
        panic!("expected a single registry update, got {events:?}");
    };
    assert_eq!(snapshot.total_value, 0);
    assert_eq!(snapshot.visible_rows().count(), 0);
    assert!(snapshot.rows.iter().all(|row| row.crafted == 0));

    // The baseline survives a reset.
    harness.inventory(&[(AIR, 160), (NATURE, 3)]);
    assert_eq!(harness.crafted(AIR), 10);
    assert_eq!(harness.crafted(NATURE), 0);
}

#[test]
fn events_are_published_by_topic() {
    let mut harness = Harness::new();
    let mut registry = harness.session.subscribe(Topic::Registry);
    let mut pouch = harness.session.subscribe(Topic::Pouch);

    harness.inventory(&[(AIR, 100)]);
    harness.inventory(&[(AIR, 101)]);

    let published = drain(&mut registry);
    assert_eq!(published.len(), 2);
    assert!(matches!(published[0], TrackerEvent::ItemsCrafted { quantity: 1, .. }));
    assert!(drain(&mut pouch).is_empty());
}

/// Fails every inventory notification while armed.
struct Faulty(Arc<AtomicBool>);

impl EventHandler for Faulty {
    fn name(&self) -> &'static str {
        "faulty"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn handle(
        &self,
        event: &HostEvent,
        _ctx: &HandlerContext<'_>,
        _state: &mut TrackerState,
    ) -> Result<Vec<TrackerEvent>> {
        if self.0.load(Ordering::SeqCst) && matches!(event, HostEvent::ItemContainerChanged { .. })
        {
            return Err(RuntimeError::Registry(RegistryError::ZeroDelta(AIR)));
        }
        Ok(vec![])
    }
}

#[test]
fn failed_notification_leaves_state_untouched() {
    let armed = Arc::new(AtomicBool::new(false));
    let host = Arc::new(MemoryHost::new());
    let mut handlers = default_handlers();
    handlers.push(Box::new(Faulty(armed.clone())));
    let mut session = TrackerSession::builder(
        tracker_content::TrackerContent::embedded().unwrap(),
        OracleManager::from_host(host.clone()),
    )
    .with_handlers(handlers)
    .build();
    let mut registry = session.subscribe(Topic::Registry);
    let inventory = HostEvent::ItemContainerChanged {
        container: tracker_core::ContainerId::INVENTORY,
    };

    host.set_container(
        tracker_core::ContainerId::INVENTORY,
        vec![tracker_core::ItemSlot::new(556, 100)],
    );
    session.dispatch(&inventory).unwrap();

    armed.store(true, Ordering::SeqCst);
    host.set_container(
        tracker_core::ContainerId::INVENTORY,
        vec![tracker_core::ItemSlot::new(556, 150)],
    );
    let err = session.dispatch(&inventory).unwrap_err();

    assert_eq!(err, RuntimeError::Registry(RegistryError::ZeroDelta(AIR)));
    assert_eq!(session.registry().get(AIR).unwrap().crafted, 0);
    assert_eq!(
        session.state().engine.baseline().unwrap().quantity(AIR),
        100
    );
    assert!(drain(&mut registry).is_empty());

    // The next notification proceeds normally against the old baseline.
    armed.store(false, Ordering::SeqCst);
    session.dispatch(&inventory).unwrap();
    assert_eq!(session.registry().get(AIR).unwrap().crafted, 50);
}
