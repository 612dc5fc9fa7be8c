//! Configuration for the admin settings module

use crate::infra::storage::DEFAULT_KEY_PREFIX;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `ADMIN_SETTINGS_STORAGE_PATH`
pub const ENV_PREFIX: &str = "ADMIN_SETTINGS_";

/// Admin settings configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Local cache directory; settings are kept in memory when unset
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Prefix applied to every key in the local cache
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Accept writes to keys outside the settings catalog
    #[serde(default)]
    pub allow_unknown_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            key_prefix: default_key_prefix(),
            allow_unknown_keys: false,
        }
    }
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Config {
    /// Layer defaults, an optional YAML file and `ADMIN_SETTINGS_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("invalid admin settings configuration")
    }
}
