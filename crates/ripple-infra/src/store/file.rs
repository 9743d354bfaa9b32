//! JSON-file store implementation - the durable backend for normal runs.
//!
//! All keys live in a single JSON object file. Every `get` reads the file
//! fresh, so a second process writing the same file is visible on the next
//! read; concurrent writers are last-write-wins at file granularity.
//! Writes replace the file through a temp file and rename, so a crash
//! mid-write never leaves a truncated store behind.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use ripple_core::ports::{Store, StoreError};

/// Durable key-value store backed by a single JSON object file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at the given path, creating parent directories as
    /// needed. The file itself appears on first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
            }
        }
        Ok(Self { path })
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(io_err(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "store file is not valid JSON, treating it as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }
}

fn io_err(e: std::io::Error) -> StoreError {
    StoreError::Io(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("ripple.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        store.set("posts", "[]").await.unwrap();
        assert_eq!(store.get("posts").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        assert_eq!(store.get("posts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn second_handle_on_same_path_sees_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ripple.json");

        let writer = JsonFileStore::open(&path).await.unwrap();
        writer.set("darkMode", "true").await.unwrap();

        let reader = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(
            reader.get("darkMode").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn corrupt_file_fails_open_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ripple.json");
        tokio::fs::write(&path, "definitely not json").await.unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.get("posts").await.unwrap(), None);

        // A write replaces the corrupt file with a valid one.
        store.set("posts", "[]").await.unwrap();
        assert_eq!(store.get("posts").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        store.set("currentUser", "null").await.unwrap();
        store.set("darkMode", "true").await.unwrap();
        store.set("currentUser", r#"{"name":"alice","email":"a@x"}"#).await.unwrap();

        assert_eq!(
            store.get("darkMode").await.unwrap(),
            Some("true".to_string())
        );
        assert_eq!(
            store.get("currentUser").await.unwrap().as_deref(),
            Some(r#"{"name":"alice","email":"a@x"}"#)
        );
    }

    #[tokio::test]
    async fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("ripple.json");

        let store = JsonFileStore::open(&nested).await.unwrap();
        store.set("darkMode", "false").await.unwrap();

        assert!(nested.exists());
    }
}
