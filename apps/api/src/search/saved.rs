//! Saved searches, persisted as a single JSON blob in the injected
//! key-value store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::search::filters::SearchFilters;
use crate::store::{KeyValueStore, StoreError};

pub const SAVED_SEARCHES_KEY: &str = "job-tracker-saved-searches";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: Uuid,
    pub name: String,
    pub filters: SearchFilters,
    pub alerts_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
    pub result_count: Option<usize>,
}

/// Clones share one write lock. Every mutation is a read-modify-write of the
/// whole blob, so mutations are serialized within this process.
#[derive(Clone)]
pub struct SavedSearchStore {
    store: Arc<dyn KeyValueStore>,
    writes: Arc<Mutex<()>>,
}

impl SavedSearchStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list(&self) -> Result<Vec<SavedSearch>, AppError> {
        match self.store.get(SAVED_SEARCHES_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).map_err(StoreError::from)?),
            None => Ok(vec![]),
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<SavedSearch, AppError> {
        self.list()
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Saved search {id} not found")))
    }

    pub async fn create(
        &self,
        name: &str,
        filters: SearchFilters,
        alerts_enabled: bool,
    ) -> Result<SavedSearch, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "saved search name cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let saved = SavedSearch {
            id: Uuid::new_v4(),
            name: name.to_string(),
            filters,
            alerts_enabled,
            created_at: now,
            last_used: now,
            result_count: None,
        };

        let _guard = self.writes.lock().await;
        let mut all = self.list().await?;
        all.push(saved.clone());
        self.write(&all).await?;

        info!("Saved search '{}' ({})", saved.name, saved.id);
        Ok(saved)
    }

    /// Marks a saved search as used now and records how many results it
    /// produced.
    pub async fn record_run(&self, id: Uuid, result_count: usize) -> Result<SavedSearch, AppError> {
        let _guard = self.writes.lock().await;
        let mut all = self.list().await?;
        let saved = all
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Saved search {id} not found")))?;
        saved.last_used = Utc::now();
        saved.result_count = Some(result_count);
        let updated = saved.clone();

        self.write(&all).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.writes.lock().await;
        let mut all = self.list().await?;
        let before = all.len();
        all.retain(|s| s.id != id);
        if all.len() == before {
            return Err(AppError::NotFound(format!("Saved search {id} not found")));
        }
        self.write(&all).await
    }

    async fn write(&self, all: &[SavedSearch]) -> Result<(), AppError> {
        let raw = serde_json::to_string(all).map_err(StoreError::from)?;
        self.store.set(SAVED_SEARCHES_KEY, &raw).await?;
        Ok(())
    }
}
