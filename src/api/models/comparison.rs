use serde::Serialize;
use utoipa::ToSchema;

/// Verdict for one source → target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Integrity {
    /// Counts match one to one.
    Complete,
    /// Source rows were split across several target tables.
    Split,
    /// Source rows were folded into another target table.
    Transformed,
    Review,
    NoData,
}

impl Integrity {
    pub fn label(self) -> &'static str {
        match self {
            Integrity::Complete => "100%",
            Integrity::Split => "Split",
            Integrity::Transformed => "Transformed",
            Integrity::Review => "Review",
            Integrity::NoData => "No data",
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(
            self,
            Integrity::Complete | Integrity::Split | Integrity::Transformed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ComparisonRow {
    pub source_table: String,
    pub source_count: u64,
    pub target_table: String,
    /// `None` when the rows live inside another target table.
    pub target_count: Option<u64>,
    pub target_note: Option<String>,
    pub integrity: Integrity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub synthea: Vec<u64>,
    pub omop: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    pub chart: ChartSeries,
    pub synthea_total: u64,
    pub omop_total: u64,
    /// Percentage of OMOP rows per Synthea row; `None` without Synthea rows.
    pub efficiency: Option<f64>,
}
