//! File-backed local cache - the authoritative settings store
//!
//! Mirrors browser local storage with one file per entry inside the cache
//! directory. The file name is `<prefix><key>.json` and the contents are the
//! JSON-serialized setting value.
//!
//! ```text
//! <dir>/admin_setting_security_limits.json    {"max_children_per_parent":5,...}
//! <dir>/admin_setting_external_programs.json  {"enabled":false,"link":"","description":""}
//! ```
//!
//! Each write goes to a uniquely named temp file in the same directory and is
//! renamed over its entry, so writers never observe or clobber each other's
//! partial state. Concurrent writes to different keys are independent; for the
//! same key the last rename wins.

use crate::domain::repository::SettingsRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Default storage key prefix
pub const DEFAULT_KEY_PREFIX: &str = "admin_setting_";

pub struct LocalCacheRepository {
    dir: PathBuf,
    prefix: String,
}

impl LocalCacheRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, DEFAULT_KEY_PREFIX)
    }

    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Entry file for a key; keys that could escape the directory are refused
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !safe {
            anyhow::bail!("setting key {:?} cannot be stored in the local cache", key);
        }
        Ok(self.dir.join(format!("{}{}.json", self.prefix, key)))
    }
}

#[async_trait]
impl SettingsRepository for LocalCacheRepository {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.entry_path(key)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .with_context(|| format!("corrupt cache entry {}", path.display()))
    }

    async fn write(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.entry_path(key)?;
        let dir = self.dir.clone();
        let bytes = serde_json::to_vec(value)?;

        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)
                .with_context(|| format!("creating temp file in {}", dir.display()))?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path)
                .with_context(|| format!("replacing {}", path.display()))?;
            Ok(())
        })
        .await?
    }
}
