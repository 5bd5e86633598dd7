//! Storage error types for the snapshot data sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data source errors.
///
/// Individual unreadable files are not errors: they load as empty. These
/// cover failures of the load itself.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageError {
    /// Data directory exists but is not a directory
    #[error("Data path is not a directory: {path}")]
    NotADirectory { path: String },
    /// Blocking load task failed to complete
    #[error("Load task failed: {0}")]
    TaskFailed(String),
}

/// Failure to count the records of one CSV file.
#[derive(Error, Debug)]
pub enum CsvCountError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A record has more fields than the header row
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}
