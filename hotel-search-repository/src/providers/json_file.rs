//! File-backed storage provider.
//!
//! Each key is stored as `<key>.json` inside a single directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::errors::StoreError;
use crate::interfaces::KeyValueStore;

/// `KeyValueStore` that persists every key to its own file on disk.
///
/// The directory is created on first write. Writes go to a temporary file that is
/// renamed into place, so a crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys are restricted to ASCII alphanumerics, `_` and `-` so they always map to
    /// a plain file name inside the store directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;

        debug!(key = %key, path = %path.display(), bytes = value.len(), "Value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state"));

        assert!(store.get("profileData").await.unwrap().is_none());

        store.set("profileData", r#"{"name":"A"}"#).await.unwrap();
        assert!(dir.path().join("state/profileData.json").exists());
        assert_eq!(
            store.get("profileData").await.unwrap().as_deref(),
            Some(r#"{"name":"A"}"#)
        );

        // A second store over the same directory sees the value.
        let reopened = JsonFileStore::new(dir.path().join("state"));
        assert!(reopened.get("profileData").await.unwrap().is_some());

        store.remove("profileData").await.unwrap();
        assert!(store.get("profileData").await.unwrap().is_none());
        store.remove("profileData").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            let result = store.set(key, "1").await;
            assert!(matches!(result, Err(StoreError::InvalidKey(_))), "{key}");
        }
    }
}
