//! Contract models for the admin settings service
//!
//! These models are transport-agnostic and used by in-process consumers.
//! NO serde derives - the typed setting payloads live in the domain catalog.

use chrono::{DateTime, Utc};

/// A resolved catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    /// Catalog key (e.g., "security_limits")
    pub key: String,
    /// Current value, persisted or schema default
    pub value: serde_json::Value,
    /// Human-readable description shown in the admin console
    pub description: String,
}

/// Catalog-wide invalidation signal published after every successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogChange {
    /// Monotonic catalog revision, 0 before the first write
    pub revision: u64,
    /// Key whose write triggered this revision (None for the initial state)
    pub key: Option<String>,
    /// When the revision was published
    pub at: DateTime<Utc>,
}

impl CatalogChange {
    /// Revision 0, before anything was written through this service
    pub fn initial() -> Self {
        Self {
            revision: 0,
            key: None,
            at: Utc::now(),
        }
    }
}
