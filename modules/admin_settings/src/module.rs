//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::SettingsApi;
use crate::domain::{Notifier, Service, SettingsRepository};
use crate::infra::storage::{InMemoryRepository, LocalCacheRepository};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Admin settings module
///
/// Owns the settings store for one admin console session. Consumers get it
/// through [`AdminSettingsModule::client`] after [`AdminSettingsModule::init`].
pub struct AdminSettingsModule {
    config: RwLock<Config>,
    notifier: Arc<dyn Notifier>,
    service: RwLock<Option<Arc<Service>>>,
}

impl AdminSettingsModule {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config: RwLock::new(Config::default()),
            notifier,
            service: RwLock::new(None),
        }
    }

    /// Build the repository and service, then load the catalog once
    pub async fn init(&self, cfg: Config) -> Result<()> {
        let repo: Arc<dyn SettingsRepository> = match &cfg.storage_path {
            Some(path) => Arc::new(LocalCacheRepository::with_prefix(
                path.clone(),
                cfg.key_prefix.clone(),
            )),
            None => {
                tracing::warn!("no storage_path configured, settings will not survive restart");
                Arc::new(InMemoryRepository::new())
            }
        };

        let service = Arc::new(
            Service::new(repo, self.notifier.clone())
                .with_unknown_keys_allowed(cfg.allow_unknown_keys),
        );
        let catalog = service.list().await;

        *self.config.write() = cfg;
        *self.service.write() = Some(service);

        tracing::info!(settings = catalog.len(), "Admin settings initialized");
        Ok(())
    }

    /// No subscriptions outlive the owning scope, so there is nothing to release
    pub fn dispose(&self) {
        tracing::info!("Admin settings disposed");
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Native client for dialogs and pages
    pub fn client(&self) -> Result<Arc<dyn SettingsApi>> {
        let client: Arc<dyn SettingsApi> = Arc::new(NativeClient::new(self.service()?));
        Ok(client)
    }
}
