// ABOUTME: Persistence interfaces for named environment configurations
// ABOUTME: Provides the ConfigStore trait with file-backed and in-memory stores

pub mod error;
pub mod file;
pub mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::template::EnvironmentConfig;

/// Named-key persistence for environment configurations.
///
/// Implementations are injected by the caller; render operations never
/// touch a store themselves.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the configuration saved under `key`.
    async fn load(&self, key: &str) -> Result<EnvironmentConfig>;

    /// Save `config` under `key`, replacing any existing entry.
    async fn save(&self, key: &str, config: &EnvironmentConfig) -> Result<()>;
}
