// ABOUTME: File-backed configuration store keeping one JSON document per key
// ABOUTME: Resolves keys to <root>/<key>.json and rejects path-shaped keys

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::error::{Result, StoreError};
use super::ConfigStore;
use crate::template::EnvironmentConfig;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Keys are plain names, never paths.
    fn config_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn load(&self, key: &str) -> Result<EnvironmentConfig> {
        let path = self.config_path(key)?;
        if !path.exists() {
            return Err(StoreError::NotFound {
                key: key.to_string(),
            });
        }

        let contents = fs::read_to_string(&path).await?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    async fn save(&self, key: &str, config: &EnvironmentConfig) -> Result<()> {
        let path = self.config_path(key)?;
        fs::create_dir_all(&self.root).await?;

        let contents = serde_json::to_string_pretty(config)?;
        fs::write(&path, contents).await?;

        debug!("Saved configuration {} to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_shaped_keys() {
        let store = FileStore::new("/tmp/configs");

        for key in ["", "nested/key", "..", "back\\slash"] {
            let err = store.config_path(key).unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey { .. }), "key: {:?}", key);
        }
    }

    #[test]
    fn test_plain_keys_resolve_under_root() {
        let store = FileStore::new("/tmp/configs");

        let path = store.config_path("email-templates").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/configs/email-templates.json"));
    }
}
