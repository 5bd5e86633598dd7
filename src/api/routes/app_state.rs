//! Application state management.
//!
//! Defines the AppState struct shared by all route handlers: the snapshot
//! cache and the runtime configuration.

use super::error::ApiError;
use crate::config::DashboardConfig;
use crate::models::{DashboardMetrics, DataSnapshot};
use crate::services::{MetricsService, SnapshotService};
use crate::storage::{DataSource, FileDataSource};
use std::sync::Arc;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached snapshot of the data directory
    pub snapshots: Arc<SnapshotService>,
    /// Runtime configuration
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    /// State reading from the configured data directory.
    pub fn new(config: DashboardConfig) -> Self {
        let source: Arc<dyn DataSource> = Arc::new(FileDataSource::new(config.data_dir.clone()));
        Self::with_source(config, source)
    }

    /// State reading from any data source.
    pub fn with_source(config: DashboardConfig, source: Arc<dyn DataSource>) -> Self {
        let snapshots = SnapshotService::with_ttl(source, config.cache_ttl);
        Self {
            snapshots: Arc::new(snapshots),
            config: Arc::new(config),
        }
    }

    /// Current snapshot and the metrics computed from it.
    pub async fn current(&self) -> Result<(Arc<DataSnapshot>, DashboardMetrics), ApiError> {
        let snapshot = self.snapshots.current().await?;
        let metrics = MetricsService::calculate(&snapshot);
        Ok((snapshot, metrics))
    }

    /// URL of the logo under `/assets`, if the file exists.
    pub fn logo_url(&self) -> Option<String> {
        self.config
            .logo_path()
            .map(|_| format!("/assets/{}", self.config.logo))
    }
}
