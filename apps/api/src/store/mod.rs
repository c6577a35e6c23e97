#![allow(dead_code)]
//! Key-value persistence behind an injected trait. Callers never touch a
//! concrete backend; `AppState` carries an `Arc<dyn KeyValueStore>`.
//!
//! Backends: `MemoryStore` (default, tests) and `RedisStore`.

pub mod redis_store;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

pub use redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;

    /// "memory" | "redis"
    fn backend(&self) -> &'static str;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().await.clear();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Builds the configured store: Redis when a URL is given, memory otherwise.
pub fn connect(redis_url: Option<&str>) -> Result<Arc<dyn KeyValueStore>> {
    match redis_url {
        Some(url) => {
            let store = RedisStore::open(url, "job-tracker")?;
            info!("Key-value store: redis");
            Ok(Arc::new(store))
        }
        None => {
            info!("Key-value store: in-memory (set REDIS_URL to persist)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
