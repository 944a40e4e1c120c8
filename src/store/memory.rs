// ABOUTME: In-memory configuration store for tests and embedded use
// ABOUTME: Keeps named configurations in a RwLock-guarded map

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::error::{Result, StoreError};
use super::ConfigStore;
use crate::template::EnvironmentConfig;

#[derive(Default)]
pub struct InMemoryStore {
    configs: RwLock<HashMap<String, EnvironmentConfig>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn load(&self, key: &str) -> Result<EnvironmentConfig> {
        let configs = self.configs.read().await;
        configs.get(key).cloned().ok_or_else(|| StoreError::NotFound {
            key: key.to_string(),
        })
    }

    async fn save(&self, key: &str, config: &EnvironmentConfig) -> Result<()> {
        let mut configs = self.configs.write().await;
        configs.insert(key.to_string(), config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let store = InMemoryStore::new();
        let config = EnvironmentConfig::new().with_variable("company", "Acme");

        store.save("default", &config).await.unwrap();
        let loaded = store.load("default").await.unwrap();

        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_missing_key() {
        let store = InMemoryStore::new();

        let err = store.load("absent").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_replaces_existing_entry() {
        let store = InMemoryStore::new();

        store
            .save("default", &EnvironmentConfig::new().with_variable("company", "Acme"))
            .await
            .unwrap();
        store
            .save("default", &EnvironmentConfig::new().with_variable("company", "Globex"))
            .await
            .unwrap();

        let loaded = store.load("default").await.unwrap();
        assert_eq!(
            loaded.namespace.get("company"),
            Some(&Some("Globex".to_string()))
        );
    }
}
