//! In-memory repository, used when no cache directory is configured

use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryRepository {
    data: RwLock<HashMap<String, Value>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &Value) -> Result<()> {
        self.data.write().insert(key.to_string(), value.clone());
        Ok(())
    }
}
