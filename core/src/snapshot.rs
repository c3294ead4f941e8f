//! Dataset export/import — full store contents to/from JSON.
//!
//! A snapshot is a developer convenience (dump a demo session, reload it
//! later), not persistence: nothing reads one implicitly at startup and
//! the product keeps its hard-coded seed data.

use crate::{
    config::AdminConfig,
    error::AdminResult,
    store::{AdminStore, Dataset},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSnapshot {
    pub snapshot_id: String,
    pub taken_at: DateTime<Utc>,
    pub dataset: Dataset,
}

impl AdminSnapshot {
    /// Capture the store's current contents.
    pub fn capture(store: &AdminStore) -> Self {
        Self {
            snapshot_id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            dataset: store.dataset(),
        }
    }

    /// Rebuild a store from this snapshot's dataset. Id assignment
    /// continues from the restored maximum per entity.
    pub fn restore(self, config: &AdminConfig) -> AdminStore {
        AdminStore::from_dataset(config, self.dataset)
    }

    pub fn to_json(&self) -> AdminResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> AdminResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_file(&self, path: &str) -> AdminResult<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("wrote snapshot {} to {path}", self.snapshot_id);
        Ok(())
    }

    pub fn read_file(path: &str) -> AdminResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }
}
