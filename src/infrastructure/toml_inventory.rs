use crate::domain::inventory::InventorySource;
use crate::domain::models::{StorageSystem, SystemId};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid inventory {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate storage system id `{0}` in inventory")]
    DuplicateId(SystemId),
}

#[derive(Debug, Default, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    systems: Vec<StorageSystem>,
}

/// Parses `[[systems]]` tables, keeping file order.
pub fn parse_inventory(content: &str, path: &Path) -> Result<Vec<StorageSystem>, InventoryError> {
    let file: InventoryFile = toml::from_str(content).map_err(|source| InventoryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for system in &file.systems {
        if !seen.insert(&system.id) {
            return Err(InventoryError::DuplicateId(system.id.clone()));
        }
    }
    Ok(file.systems)
}

/// Inventory stored as a TOML file on disk.
#[derive(Debug, Clone)]
pub struct TomlInventory {
    path: PathBuf,
    // A missing file is an error only when the user pointed us at it
    required: bool,
}

impl TomlInventory {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    #[must_use]
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        crate::config::config_dir().map(|dir| dir.join("inventory.toml"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<Vec<StorageSystem>, InventoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.required => {
                tracing::debug!(path = %self.path.display(), "no inventory file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(InventoryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        parse_inventory(&content, &self.path)
    }
}

#[async_trait]
impl InventorySource for TomlInventory {
    async fn load(&self) -> anyhow::Result<Vec<StorageSystem>> {
        let systems = self.read().await?;
        tracing::info!(path = %self.path.display(), count = systems.len(), "inventory loaded");
        Ok(systems)
    }

    fn watch_path(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
