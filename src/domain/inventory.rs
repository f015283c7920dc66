use crate::domain::models::StorageSystem;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the console gets its list of storage systems from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventorySource: Send + Sync {
    // Full, ordered list of systems; replaces whatever the panel showed before
    async fn load(&self) -> Result<Vec<StorageSystem>>;

    // File to watch for external edits, if the source is file backed
    fn watch_path(&self) -> Option<PathBuf>;
}
