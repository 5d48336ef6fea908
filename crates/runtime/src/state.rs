//! Mutable tracker state owned by a session.

use tracker_core::{DeltaEngine, PouchChangeDetector, TrackedItemRegistry};

/// Everything a notification may mutate.
///
/// The session clones this before dispatching and swaps the clone back in
/// only when every handler succeeds, so a failed notification leaves no trace.
#[derive(Clone, Debug, Default)]
pub struct TrackerState {
    /// Inventory baseline and commit policy.
    pub engine: DeltaEngine,
    /// Crafted totals read by the presentation layer.
    pub registry: TrackedItemRegistry,
    /// Last published pouch contents.
    pub pouch: PouchChangeDetector,
    /// Whether the host is inside a logged-in session.
    pub logged_in: bool,
}
