//! Common error infrastructure for tracker-core.
//!
//! Domain errors (`RegistryError`, `CatalogError`, `ConfigError`) live next to
//! the code that raises them and implement [`TrackerError`] so the runtime can
//! classify them uniformly when it reports a dropped notification.
//!
//! Malformed pouch slots, missing containers and failed price lookups are not
//! errors at all: they are skipped where they occur and never reach this layer.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: configuration unusable, tracking cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero delta, duplicate catalog entry
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: crafted counter overflow
    Internal,

    /// Fatal error - the tracker cannot be constructed.
    ///
    /// Examples: literal threshold inside the pouch table range
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tracker-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait TrackerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
