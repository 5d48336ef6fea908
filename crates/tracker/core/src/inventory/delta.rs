use std::collections::BTreeMap;

use crate::env::{ItemCatalog, ItemId};

use super::{Baseline, InventoryObservation};

/// Positive per-item quantity increases.
pub type ItemDeltas = BTreeMap<ItemId, u64>;

/// Computes `current - baseline` for every item present in `current`.
///
/// Only strictly positive differences are emitted. Items that decreased or
/// disappeared are not reported: consumption is not tracked.
pub fn diff(current: &InventoryObservation, baseline: &InventoryObservation) -> ItemDeltas {
    current
        .iter()
        .filter_map(|(id, quantity)| {
            let delta = quantity.saturating_sub(baseline.quantity(id));
            (delta > 0).then_some((id, delta))
        })
        .collect()
}

/// What a comparison did (or will do) to the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaselineStatus {
    /// No baseline existed; the observation becomes the first snapshot.
    Initialized,
    /// A tracked item increased; the observation replaces the baseline.
    Advanced,
    /// Nothing tracked increased; the previous baseline stays.
    Held,
}

/// Result of comparing one observation against the current baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaOutcome {
    /// Increases of tracked items. These feed the registry.
    pub tracked: ItemDeltas,
    /// Increases of every other item, kept for diagnostics only.
    pub untracked: ItemDeltas,
    pub status: BaselineStatus,
}

impl DeltaOutcome {
    fn initialized() -> Self {
        Self {
            tracked: ItemDeltas::new(),
            untracked: ItemDeltas::new(),
            status: BaselineStatus::Initialized,
        }
    }

    /// Returns true if the observation should replace the baseline.
    pub fn commits(&self) -> bool {
        !matches!(self.status, BaselineStatus::Held)
    }
}

/// Owns the inventory baseline and applies the commit policy.
///
/// The baseline only advances when a comparison finds at least one tracked
/// increase. Holding it otherwise means an unrelated inventory event that
/// lands between the craft and the item grant cannot absorb the increase: the
/// next notification is still diffed against the pre-craft snapshot.
#[derive(Clone, Debug, Default)]
pub struct DeltaEngine {
    baseline: Option<Baseline>,
}

impl DeltaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Compares `current` against the baseline without committing anything.
    ///
    /// With no baseline the outcome is empty and [`BaselineStatus::Initialized`]:
    /// the first inventory ever seen must not be reported as crafted.
    pub fn evaluate(&self, current: &InventoryObservation, catalog: &ItemCatalog) -> DeltaOutcome {
        let Some(baseline) = &self.baseline else {
            return DeltaOutcome::initialized();
        };

        let (tracked, untracked): (ItemDeltas, ItemDeltas) = diff(current, baseline.observation())
            .into_iter()
            .partition(|(id, _)| catalog.is_tracked(*id));

        let status = if tracked.is_empty() {
            BaselineStatus::Held
        } else {
            BaselineStatus::Advanced
        };

        DeltaOutcome {
            tracked,
            untracked,
            status,
        }
    }

    /// Applies the commit decision of a previous [`evaluate`](Self::evaluate).
    ///
    /// Returns true if the baseline was replaced.
    pub fn commit(&mut self, current: InventoryObservation, outcome: &DeltaOutcome) -> bool {
        if !outcome.commits() {
            return false;
        }
        self.baseline = Some(Baseline::capture(current));
        true
    }

    /// Evaluates and commits in one step.
    pub fn observe(&mut self, current: InventoryObservation, catalog: &ItemCatalog) -> DeltaOutcome {
        let outcome = self.evaluate(&current, catalog);
        self.commit(current, &outcome);
        outcome
    }

    /// Takes a snapshot only if no baseline exists yet.
    ///
    /// Returns true if the snapshot was taken. An existing baseline is never
    /// overwritten: priming right before the crafted item arrives would erase
    /// the pre-craft state the next diff needs.
    pub fn prime(&mut self, observation: InventoryObservation) -> bool {
        if self.baseline.is_some() {
            return false;
        }
        self.baseline = Some(Baseline::capture(observation));
        true
    }

    /// Replaces the baseline unconditionally.
    pub fn rebaseline(&mut self, observation: InventoryObservation) {
        self.baseline = Some(Baseline::capture(observation));
    }

    pub fn clear(&mut self) {
        self.baseline = None;
    }
}
