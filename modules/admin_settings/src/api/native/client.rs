//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{CatalogChange, Setting, SettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// Native client implementation that directly calls the domain service
///
/// Handed to dialogs and pages as `Arc<dyn SettingsApi>` so they never reach
/// for a global settings object.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn list(&self) -> Vec<Setting> {
        self.service.list().await
    }

    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.service.get(key).await
    }

    async fn update(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.service.update(key, value).await
    }

    fn subscribe(&self) -> watch::Receiver<CatalogChange> {
        self.service.subscribe()
    }
}
