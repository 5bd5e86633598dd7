use super::pipeline_report::PipelineReport;
use super::tables::{OmopTable, SyntheaTable, TableCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One load of the data directory: both sides of the transformation plus
/// the latest pipeline report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub synthea: TableCounts<SyntheaTable>,
    pub omop: TableCounts<OmopTable>,
    pub pipeline_report: PipelineReport,
    pub loaded_at: DateTime<Utc>,
}

impl DataSnapshot {
    pub fn new(
        synthea: TableCounts<SyntheaTable>,
        omop: TableCounts<OmopTable>,
        pipeline_report: PipelineReport,
    ) -> Self {
        Self {
            synthea,
            omop,
            pipeline_report,
            loaded_at: Utc::now(),
        }
    }

    /// Snapshot of a directory with nothing in it.
    pub fn empty() -> Self {
        Self::new(TableCounts::new(), TableCounts::new(), PipelineReport::empty())
    }
}
