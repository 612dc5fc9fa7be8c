//! Repository trait for setting persistence
//!
//! Implementations are in infra/storage.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Key/value persistence for setting values
///
/// Keys are bare catalog keys; implementations apply their own storage
/// prefix. Reads must be idempotent and writes atomic per key.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read a stored value, `None` when nothing was written for the key
    async fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Write a value, replacing any previous one
    async fn write(&self, key: &str, value: &Value) -> Result<()>;
}
