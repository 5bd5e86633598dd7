//! Storage trait definitions for snapshot data sources.

use super::StorageError;
use crate::models::DataSnapshot;

/// Something that can produce a fresh [`DataSnapshot`].
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Load row counts and the latest pipeline report.
    async fn load(&self) -> Result<DataSnapshot, StorageError>;

    /// Short description for logs, e.g. the data directory.
    fn describe(&self) -> String;
}

/// Data source serving a fixed snapshot.
///
/// Used when the counts come from somewhere other than the filesystem.
pub struct StaticDataSource {
    snapshot: DataSnapshot,
}

impl StaticDataSource {
    pub fn new(snapshot: DataSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait::async_trait]
impl DataSource for StaticDataSource {
    async fn load(&self) -> Result<DataSnapshot, StorageError> {
        let mut snapshot = self.snapshot.clone();
        snapshot.loaded_at = chrono::Utc::now();
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        "static snapshot".to_string()
    }
}
