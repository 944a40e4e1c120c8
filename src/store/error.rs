// ABOUTME: Error types for configuration store operations
// ABOUTME: Covers missing keys, invalid keys, and serialization failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Configuration not found: {key}")]
    NotFound { key: String },

    #[error("Invalid configuration key: {key}")]
    InvalidKey { key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
