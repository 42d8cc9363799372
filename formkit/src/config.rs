use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{FileStore, FormStore, MemoryStore, RecordStore, store::DEFAULT_STORE_KEY};

/// Configuration for a formkit deployment, loaded from TOML.
///
/// ```toml
/// [storage]
/// backend = "file"
/// dir = "./data"
/// key = "formModels"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormkitConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend.
    pub dir: Option<PathBuf>,

    /// Key the record list is stored under.
    #[serde(default = "default_key")]
    pub key: String,

    /// Byte quota for the memory backend.
    pub quota_bytes: Option<usize>,
}

fn default_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: None,
            key: default_key(),
            quota_bytes: None,
        }
    }
}

impl FormkitConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).context("Failed to parse config (invalid TOML)")?;
        config.storage.check()?;
        Ok(config)
    }
}

impl StorageConfig {
    fn check(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            anyhow::bail!("storage.key must not be empty");
        }
        if self.backend == StorageBackend::File && self.dir.is_none() {
            anyhow::bail!("storage.dir is required for the file backend");
        }
        Ok(())
    }

    /// Build the record store this config describes.
    pub fn open(&self) -> Result<Box<dyn FormStore + Send + Sync>> {
        self.check()?;
        let store: Box<dyn FormStore + Send + Sync> = match self.backend {
            StorageBackend::Memory => {
                let mut backend = MemoryStore::new();
                if let Some(quota) = self.quota_bytes {
                    backend = backend.with_quota(quota);
                }
                Box::new(RecordStore::with_key(backend, &self.key))
            }
            StorageBackend::File => {
                let dir = self
                    .dir
                    .clone()
                    .context("storage.dir is required for the file backend")?;
                Box::new(RecordStore::with_key(FileStore::new(dir), &self.key))
            }
        };
        tracing::debug!(backend = ?self.backend, key = %self.key, "opened form store");
        Ok(store)
    }
}
