//! Tracker session: owns the state and drives handlers for each notification.

use tokio::sync::broadcast;
use tracker_content::TrackerContent;
use tracker_core::{RegistrySnapshot, TrackedItemRegistry, TrackerError, describe};

use crate::error::Result;
use crate::events::{EventBus, HostEvent, Topic, TrackerEvent};
use crate::handlers::{EventHandler, HandlerContext, default_handlers};
use crate::oracle::OracleManager;
use crate::state::TrackerState;

/// Summary shown while no pouch is present.
pub const NO_POUCH: &str = "(no pouch)";

/// Single-writer tracker session.
///
/// Every notification is handled against a staged copy of [`TrackerState`].
/// The copy replaces the live state and its events are published only when
/// every handler succeeds; otherwise the notification is dropped and logged.
pub struct TrackerSession {
    content: TrackerContent,
    oracles: OracleManager,
    state: TrackerState,
    handlers: Vec<Box<dyn EventHandler>>,
    bus: EventBus,
}

impl TrackerSession {
    /// Create a new session builder
    pub fn builder(content: TrackerContent, oracles: OracleManager) -> TrackerSessionBuilder {
        TrackerSessionBuilder::new(content, oracles)
    }

    /// Creates a session with the default handlers and event bus.
    pub fn new(content: TrackerContent, oracles: OracleManager) -> Self {
        Self::builder(content, oracles).build()
    }

    /// Handles one host notification.
    ///
    /// Returns the events that were published. On error the previous state is
    /// kept and nothing is published.
    pub fn dispatch(&mut self, event: &HostEvent) -> Result<Vec<TrackerEvent>> {
        let ctx = HandlerContext {
            catalog: &self.content.catalog,
            config: &self.content.config,
            oracles: &self.oracles,
        };

        let mut staged = self.state.clone();
        let mut events = Vec::new();
        for handler in &self.handlers {
            match handler.handle(event, &ctx, &mut staged) {
                Ok(produced) => events.extend(produced),
                Err(error) => {
                    let severity = error.severity();
                    if severity.is_internal() {
                        tracing::error!(
                            target: "runtime::session",
                            handler = handler.name(),
                            code = error.error_code(),
                            severity = severity.as_str(),
                            event = ?event,
                            "Notification dropped: {}", error
                        );
                    } else {
                        tracing::warn!(
                            target: "runtime::session",
                            handler = handler.name(),
                            code = error.error_code(),
                            severity = severity.as_str(),
                            event = ?event,
                            "Notification rejected: {}", error
                        );
                    }
                    return Err(error);
                }
            }
        }

        self.state = staged;
        for tracker_event in &events {
            self.bus.publish(tracker_event.clone());
        }
        Ok(events)
    }

    /// Zeroes every crafted counter and publishes the cleared registry.
    pub fn reset(&mut self) -> Result<Vec<TrackerEvent>> {
        self.dispatch(&HostEvent::ResetRequested)
    }

    /// Replaces the inventory baseline with the current inventory without
    /// recording anything.
    ///
    /// Returns false, keeping the baseline, while the host has no inventory
    /// loaded.
    pub fn resync_baseline(&mut self) -> bool {
        let ctx = HandlerContext {
            catalog: &self.content.catalog,
            config: &self.content.config,
            oracles: &self.oracles,
        };
        let Some(observation) = ctx.observe_inventory() else {
            tracing::debug!("Inventory not loaded, baseline kept");
            return false;
        };
        tracing::debug!("Baseline resynced to {} stacks", observation.len());
        self.state.engine.rebaseline(observation);
        true
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.state.registry.snapshot()
    }

    /// Human-readable pouch contents as last published.
    pub fn pouch_summary(&self) -> String {
        match self.state.pouch.last_published() {
            Some(contents) => describe(contents, &self.content.catalog),
            None => NO_POUCH.to_string(),
        }
    }

    pub fn registry(&self) -> &TrackedItemRegistry {
        &self.state.registry
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn content(&self) -> &TrackerContent {
        &self.content
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<TrackerEvent> {
        self.bus.subscribe(topic)
    }
}

/// Builder for [`TrackerSession`].
pub struct TrackerSessionBuilder {
    content: TrackerContent,
    oracles: OracleManager,
    handlers: Option<Vec<Box<dyn EventHandler>>>,
    bus: Option<EventBus>,
}

impl TrackerSessionBuilder {
    fn new(content: TrackerContent, oracles: OracleManager) -> Self {
        Self {
            content,
            oracles,
            handlers: None,
            bus: None,
        }
    }

    /// Replace the default handler set. Handlers run in priority order.
    pub fn with_handlers(mut self, handlers: Vec<Box<dyn EventHandler>>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Publish on an existing bus instead of a fresh one.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn build(self) -> TrackerSession {
        let mut handlers = self.handlers.unwrap_or_else(default_handlers);
        handlers.sort_by_key(|handler| handler.priority());

        let mut registry = TrackedItemRegistry::from_catalog(&self.content.catalog);
        let priced = registry.refresh_prices(self.oracles.prices());
        tracing::debug!(
            "Registry initialized with {} items ({} priced)",
            registry.items().len(),
            priced
        );

        TrackerSession {
            state: TrackerState {
                registry,
                ..TrackerState::default()
            },
            content: self.content,
            oracles: self.oracles,
            handlers,
            bus: self.bus.unwrap_or_default(),
        }
    }
}

