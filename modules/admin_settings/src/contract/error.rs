//! Contract error types for the admin settings service
//!
//! These errors are transport-agnostic and carry user-facing messages.

/// Message surfaced when the backing store rejects a write
pub const PERSISTENCE_FAILED_MESSAGE: &str = "Failed to save setting to local storage";

/// Settings service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Payload is malformed or a bounded field is out of range
    #[error("{message}")]
    Validation {
        /// Offending field (or the setting key when the whole payload is malformed)
        field: String,
        /// Field-specific message including the valid range
        message: String,
    },

    /// Key is not part of the settings catalog
    #[error("Unknown setting: {key}")]
    UnknownKey {
        /// Rejected key
        key: String,
    },

    /// Storage write failed; nothing was persisted
    #[error("{message}")]
    Persistence {
        /// Generic user-facing message
        message: String,
    },
}

impl SettingsError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn persistence() -> Self {
        Self::Persistence {
            message: PERSISTENCE_FAILED_MESSAGE.to_string(),
        }
    }
}
