//! JSON File Store
//!
//! Persists the item list as a pretty-printed JSON array at a fixed path,
//! overwriting the file on every save. Intermediate directories are created
//! as needed; there is no temp-file-then-rename step.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::ListStore;
use crate::domain::{DomainError, DomainResult, Item};

/// File name of the persisted list inside the app's local data directory
pub const LIST_FILE_NAME: &str = "list-data.json";

/// JSON-file-backed [`ListStore`]
pub struct JsonListStore {
    path: PathBuf,
}

impl JsonListStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Full path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListStore for JsonListStore {
    async fn save(&self, items: &[Item]) -> DomainResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| DomainError::Io(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(items).map_err(|e| DomainError::Io(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::Io(e.to_string()))
    }

    async fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomainError::Io(e.to_string())),
        };
        let items = serde_json::from_str(&json).map_err(|e| DomainError::Io(e.to_string()))?;
        Ok(Some(items))
    }
}
