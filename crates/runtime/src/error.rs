//! Runtime errors.

use tracker_core::{ErrorSeverity, RegistryError, TrackerError};

/// Errors that abort a single notification.
///
/// When a handler returns one of these the session drops the notification,
/// keeps its previous state and reports the error through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Applying crafted deltas failed.
    #[error("registry update failed: {0}")]
    Registry(#[from] RegistryError),
}

impl TrackerError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Registry(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
