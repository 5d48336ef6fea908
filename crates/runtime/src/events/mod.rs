//! Inbound host notifications and the outbound topic-based event bus.
//!
//! [`HostEvent`]s are what the host feeds into the session. [`TrackerEvent`]s
//! are what the session publishes for the presentation layer, routed by
//! [`Topic`] so a consumer can subscribe to the registry or the pouch alone.

mod bus;
mod host;
mod types;

pub use bus::{EventBus, Topic};
pub use host::{GameState, HostEvent};
pub use types::TrackerEvent;
