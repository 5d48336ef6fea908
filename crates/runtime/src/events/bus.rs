//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use super::TrackerEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Crafted totals and prices
    Registry,
    /// Rune pouch contents
    Pouch,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Registry, Topic::Pouch];
}

/// Topic-based event bus
///
/// Publishing never blocks and never fails: a slow or absent subscriber only
/// loses events, it cannot stall or roll back the tracker.
#[derive(Clone)]
pub struct EventBus {
    registry: broadcast::Sender<TrackerEvent>,
    pouch: broadcast::Sender<TrackerEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: broadcast::channel(capacity).0,
            pouch: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<TrackerEvent> {
        match topic {
            Topic::Registry => &self.registry,
            Topic::Pouch => &self.pouch,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: TrackerEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<TrackerEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<TrackerEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
