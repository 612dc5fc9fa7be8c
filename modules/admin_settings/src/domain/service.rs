//! Domain service - settings catalog reads, validation and writes

use super::catalog::{CatalogSetting, SettingKey};
use super::events::{Notification, Notifier};
use super::repository::SettingsRepository;
use super::validation;
use crate::contract::{CatalogChange, Setting, SettingsError};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;

/// Domain service for the admin settings catalog
pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    notifier: Arc<dyn Notifier>,
    allow_unknown_keys: bool,
    /// Catalog revision broadcast; every successful write invalidates all keys
    changes: watch::Sender<CatalogChange>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn SettingsRepository>, notifier: Arc<dyn Notifier>) -> Self {
        let (changes, _) = watch::channel(CatalogChange::initial());
        Self {
            repo,
            notifier,
            allow_unknown_keys: false,
            changes,
        }
    }

    /// Persist writes to keys outside the catalog instead of rejecting them
    pub fn with_unknown_keys_allowed(mut self, allow: bool) -> Self {
        self.allow_unknown_keys = allow;
        self
    }

    // ===== Reads =====

    /// Full catalog in display order
    pub async fn list(&self) -> Vec<Setting> {
        let mut settings = Vec::with_capacity(SettingKey::ALL.len());
        for key in SettingKey::ALL {
            settings.push(Setting {
                key: key.as_str().to_string(),
                value: self.resolve(key).await,
                description: key.description().to_string(),
            });
        }
        settings
    }

    /// Value for a catalog key, `None` for keys outside the catalog
    pub async fn get(&self, key: &str) -> Option<Value> {
        let key = SettingKey::parse(key)?;
        Some(self.resolve(key).await)
    }

    /// Typed getter; undecodable stored values fall back to the default
    pub async fn typed<T: CatalogSetting>(&self) -> T {
        let value = self.resolve(T::KEY).await;
        match serde_json::from_value(value) {
            Ok(typed) => typed,
            Err(e) => {
                let key = T::KEY;
                tracing::warn!(key = %key, error = %e, "stored setting has wrong shape, using default");
                T::default()
            }
        }
    }

    /// Stored value or schema default; storage errors are logged, never returned
    async fn resolve(&self, key: SettingKey) -> Value {
        match self.repo.read(key.as_str()).await {
            Ok(Some(value)) => value,
            Ok(None) => key.default_value(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read setting, using default");
                key.default_value()
            }
        }
    }

    // ===== Writes =====

    /// Validate and persist a value
    ///
    /// Nothing is written when validation fails. Every outcome is reported
    /// to the notifier.
    pub async fn update(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        match self.try_update(key, value).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(
                    "Setting updated",
                    format!("{} has been saved.", key),
                ));
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Error updating setting", e.to_string()));
                Err(e)
            }
        }
    }

    async fn try_update(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        match SettingKey::parse(key) {
            Some(catalog_key) => validation::validate_setting(catalog_key, &value)?,
            None if self.allow_unknown_keys => {
                tracing::debug!(key = %key, "writing setting outside the catalog");
            }
            None => {
                return Err(SettingsError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }

        self.repo.write(key, &value).await.map_err(|e| {
            tracing::warn!(key = %key, error = %e, "failed to persist setting");
            SettingsError::persistence()
        })?;

        let mut revision = 0;
        self.changes.send_modify(|change| {
            change.revision += 1;
            change.key = Some(key.to_string());
            change.at = chrono::Utc::now();
            revision = change.revision;
        });
        tracing::info!(key = %key, revision, "setting updated");
        Ok(())
    }

    // ===== Invalidation =====

    /// Receiver that observes every catalog revision
    pub fn subscribe(&self) -> watch::Receiver<CatalogChange> {
        self.changes.subscribe()
    }

    /// Current catalog revision
    pub fn revision(&self) -> u64 {
        self.changes.borrow().revision
    }
}
