//! Runtime wiring for the runecrafting tracker.
//!
//! This crate adapts host notifications to the pure `tracker-core` logic and
//! publishes the results for a presentation layer. Consumers build a
//! [`TrackerSession`], feed it [`HostEvent`]s and subscribe to the
//! [`EventBus`] topics they care about.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the state and runs each notification atomically
//! - [`handlers`] hold the per-notification logic
//! - [`events`] provides inbound notifications and the topic-based event bus
//! - [`oracle`] provides host data adapters, including an in-memory host
pub mod error;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod session;
pub mod state;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, GameState, HostEvent, Topic, TrackerEvent};
pub use handlers::{
    EventHandler, HandlerContext, InventoryHandler, LoginHandler, PouchHandler, ResetHandler,
    StatHandler, default_handlers,
};
pub use oracle::{MemoryHost, OracleManager};
pub use session::{NO_POUCH, TrackerSession, TrackerSessionBuilder};
pub use state::TrackerState;
