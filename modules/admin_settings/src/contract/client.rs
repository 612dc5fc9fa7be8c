//! Native client trait for in-process consumers
//!
//! Dialogs and pages depend on this trait instead of a global settings object.

use super::{
    error::SettingsError,
    model::{CatalogChange, Setting},
};
use async_trait::async_trait;
use tokio::sync::watch;

/// Settings API for in-process consumers
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Full catalog in display order, each value persisted or defaulted
    async fn list(&self) -> Vec<Setting>;

    /// Value for a catalog key, `None` when the key is not in the catalog
    async fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Validate and persist a value
    async fn update(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;

    /// Receiver that observes every catalog revision
    fn subscribe(&self) -> watch::Receiver<CatalogChange>;
}
