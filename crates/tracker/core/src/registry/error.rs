use crate::env::ItemId;
use crate::error::{ErrorSeverity, TrackerError};

/// Errors raised while updating crafted totals.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistryError {
    /// Deltas are strictly positive by construction.
    #[error("delta for item {0} must be positive")]
    ZeroDelta(ItemId),

    #[error("crafted count for item {item} would overflow ({crafted} + {delta})")]
    CounterOverflow { item: ItemId, crafted: u64, delta: u64 },
}

impl TrackerError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        use RegistryError::*;
        match self {
            ZeroDelta(_) => ErrorSeverity::Validation,
            CounterOverflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use RegistryError::*;
        match self {
            ZeroDelta(_) => "REGISTRY_ZERO_DELTA",
            CounterOverflow { .. } => "REGISTRY_COUNTER_OVERFLOW",
        }
    }
}
