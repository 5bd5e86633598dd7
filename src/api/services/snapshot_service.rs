//! Cached access to the current data snapshot.

use crate::models::DataSnapshot;
use crate::storage::{DataSource, StorageError};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Keeps the last loaded snapshot until it is reloaded or expires.
pub struct SnapshotService {
    source: Arc<dyn DataSource>,
    ttl: Option<Duration>,
    cached: RwLock<Option<Arc<DataSnapshot>>>,
}

impl SnapshotService {
    /// Cache forever; only [`SnapshotService::reload`] refreshes.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            ttl: None,
            cached: RwLock::new(None),
        }
    }

    pub fn with_ttl(source: Arc<dyn DataSource>, ttl: Option<std::time::Duration>) -> Self {
        Self {
            source,
            ttl: ttl.and_then(|d| Duration::from_std(d).ok()),
            cached: RwLock::new(None),
        }
    }

    fn is_fresh(&self, snapshot: &DataSnapshot) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now() - snapshot.loaded_at < ttl,
            None => true,
        }
    }

    /// Cached snapshot, loading it if there is none or it has expired.
    pub async fn current(&self) -> Result<Arc<DataSnapshot>, StorageError> {
        {
            let cached = self.cached.read().await;
            if let Some(snapshot) = cached.as_ref() {
                if self.is_fresh(snapshot) {
                    return Ok(snapshot.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;
        // Another request may have loaded while we waited for the lock.
        if let Some(snapshot) = cached.as_ref() {
            if self.is_fresh(snapshot) {
                return Ok(snapshot.clone());
            }
        }

        let snapshot = Arc::new(self.source.load().await?);
        *cached = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Load a new snapshot and replace the cached one.
    pub async fn reload(&self) -> Result<Arc<DataSnapshot>, StorageError> {
        info!("Reloading snapshot from {}", self.source.describe());
        let snapshot = Arc::new(self.source.load().await?);
        *self.cached.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}
