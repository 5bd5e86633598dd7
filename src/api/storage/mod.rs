//! Storage module for the dashboard.
//!
//! Provides data sources that produce snapshots of a transformation run.

pub mod error;
pub mod traits;

// Data source implementations
pub mod file;

pub use error::{CsvCountError, StorageError};
pub use file::FileDataSource;
pub use traits::{DataSource, StaticDataSource};
