use async_trait::async_trait;
use redis::AsyncCommands;

use crate::store::{KeyValueStore, StoreError};

/// Redis-backed store. Keys are namespaced as `<namespace>:<key>` so
/// `clear` only touches this service's keys.
pub struct RedisStore {
    client: redis::Client,
    namespace: String,
}

impl RedisStore {
    pub fn open(url: &str, namespace: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: redis::Client::open(url)?,
            namespace: namespace.to_string(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(self.key(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(self.key(key)).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let keys: Vec<String> = conn.keys(format!("{}:*", self.namespace)).await?;
        if !keys.is_empty() {
            conn.del::<_, ()>(keys).await?;
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
