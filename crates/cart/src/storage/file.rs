//! File-backed storage backend.
//!
//! Each key is one JSON file under the data directory. Writes land in a
//! temporary file first and are renamed into place, so a reader sees either
//! the previous snapshot or the new one, never a torn write.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::CartStorage;
use crate::error::StorageError;

/// Storage backend that keeps each key as a file in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend rooted at `dir`.
    ///
    /// The directory is created on first write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map a storage key to a portable file name.
///
/// Keys are namespaced with `:`, which is not a safe file name character
/// everywhere; anything outside `[A-Za-z0-9._-]` is replaced.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl CartStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key_keeps_safe_characters() {
        assert_eq!(sanitize_key("PocketMarket-v1.2_x"), "PocketMarket-v1.2_x");
    }

    #[test]
    fn test_sanitize_key_replaces_namespace_separator() {
        assert_eq!(sanitize_key("PocketMarket:Products"), "PocketMarket_Products");
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert_eq!(storage.get("PocketMarket:Products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.set("PocketMarket:Products", "[]").await.unwrap();
        assert_eq!(
            storage.get("PocketMarket:Products").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_set_leaves_no_temp_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.set("PocketMarket:Products", "[]").await.unwrap();
        storage.set("PocketMarket:Products", "[1]").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["PocketMarket_Products.json".to_string()]);
    }

    #[tokio::test]
    async fn test_set_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cart").join("state");
        let storage = JsonFileStorage::new(&nested);

        storage.set("PocketMarket:Products", "[]").await.unwrap();
        assert_eq!(
            storage.get("PocketMarket:Products").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
