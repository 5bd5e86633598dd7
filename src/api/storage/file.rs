//! File-based data source.
//!
//! Reads the directory layout the transformation pipeline writes:
//!
//! ```text
//! <root>/synthea/<table>.csv
//! <root>/omop/<table>.csv
//! <root>/pipeline_report_<timestamp>.json
//! ```

use super::{CsvCountError, DataSource, StorageError};
use crate::models::{DataSnapshot, OmopTable, PipelineReport, SyntheaTable, TableCounts};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const REPORT_PREFIX: &str = "pipeline_report_";
const REPORT_SUFFIX: &str = ".json";

/// Data source reading CSV exports and pipeline reports from disk.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    root: PathBuf,
}

impl FileDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn synthea_dir(&self) -> PathBuf {
        self.root.join("synthea")
    }

    pub fn omop_dir(&self) -> PathBuf {
        self.root.join("omop")
    }

    /// Synchronous load. Runs on a blocking thread when called through [`DataSource`].
    pub fn load_blocking(&self) -> Result<DataSnapshot, StorageError> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(StorageError::NotADirectory {
                path: self.root.display().to_string(),
            });
        }
        if !self.root.exists() {
            warn!("Data directory not found: {:?}", self.root);
        }

        let synthea_dir = self.synthea_dir();
        let synthea = load_counts(&synthea_dir, SyntheaTable::ALL, SyntheaTable::file_name);
        let omop_dir = self.omop_dir();
        let omop = load_counts(&omop_dir, OmopTable::ALL, OmopTable::file_name);
        let pipeline_report = load_latest_report(&self.root);

        info!(
            "Loaded snapshot from {:?}: {} Synthea files ({} rows), {} OMOP tables ({} rows), report: {}",
            self.root,
            synthea.present(),
            synthea.total(),
            omop.present(),
            omop.total(),
            pipeline_report.source_file.as_deref().unwrap_or("none")
        );

        Ok(DataSnapshot::new(synthea, omop, pipeline_report))
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn load(&self) -> Result<DataSnapshot, StorageError> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.load_blocking())
            .await
            .map_err(|e| StorageError::TaskFailed(e.to_string()))?
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}

/// Count the data records of a headered CSV file.
///
/// Blank lines are skipped and short rows still count. A row with more
/// fields than the header, or invalid UTF-8, is an error.
pub fn count_csv_rows(path: &Path) -> Result<u64, CsvCountError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let expected = reader.headers()?.len();

    let mut rows = 0u64;
    for record in reader.records() {
        let record = record?;
        if record.len() > expected {
            return Err(CsvCountError::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                expected,
                found: record.len(),
            });
        }
        rows += 1;
    }
    Ok(rows)
}

/// Row counts for every table whose file exists in `dir`.
///
/// Files that exist but cannot be read count as zero.
pub fn load_counts<T, I, F>(dir: &Path, tables: I, file_name: F) -> TableCounts<T>
where
    T: Ord + Copy + std::fmt::Debug,
    I: IntoIterator<Item = T>,
    F: Fn(T) -> String,
{
    let mut counts = TableCounts::new();
    for table in tables {
        let path = dir.join(file_name(table));
        if !path.exists() {
            debug!("Table file not found: {:?}", path);
            continue;
        }
        let rows = match count_csv_rows(&path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Failed to read {:?}: {}. Counting as 0 rows.", path, e);
                0
            }
        };
        counts.insert(table, rows);
    }
    counts
}

/// The pipeline report with the greatest file name directly under `dir`.
pub fn find_latest_report(dir: &Path) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {:?} for pipeline reports: {}", dir, e);
            return None;
        }
    };

    entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let matches = name.starts_with(REPORT_PREFIX)
                && name.ends_with(REPORT_SUFFIX)
                && name.len() >= REPORT_PREFIX.len() + REPORT_SUFFIX.len();
            matches.then(|| (name, entry.path()))
        })
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, path)| path)
}

/// Load the latest pipeline report, or an empty one.
pub fn load_latest_report(dir: &Path) -> PipelineReport {
    let Some(path) = find_latest_report(dir) else {
        return PipelineReport::empty();
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read pipeline report {:?}: {}", path, e);
            return PipelineReport::empty();
        }
    };

    match serde_json::from_str(&content) {
        Ok(body) => PipelineReport::new(file_name, body),
        Err(e) => {
            warn!("Failed to parse pipeline report {:?}: {}", path, e);
            PipelineReport::empty()
        }
    }
}
