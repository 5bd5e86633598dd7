use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers computed from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardMetrics {
    pub total_patients: u64,
    pub total_encounters: u64,
    pub total_conditions: u64,
    pub total_medications: u64,
    pub total_procedures: u64,
    pub total_observations: u64,
    pub omop_persons: u64,
    pub omop_visits: u64,
    pub omop_conditions: u64,
    pub omop_drugs: u64,
    pub omop_procedures: u64,
    pub omop_measurements: u64,
    pub omop_observations: u64,
    /// Fraction in `[0, 1]` for derived values; reported values are passed through.
    pub success_rate: f64,
    /// Seconds.
    pub processing_time: f64,
    pub db_connected: bool,
    pub concept_rate: f64,
    pub status: DataStatus,
    /// Number of Synthea files found.
    pub synthea_files: usize,
    /// Number of OMOP files found.
    pub omop_tables: usize,
}

impl DashboardMetrics {
    /// `"3m 5s"` style rendering of the processing time.
    pub fn processing_time_display(&self) -> String {
        format_duration(self.processing_time)
    }
}

/// What data the dashboard could find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataStatus {
    /// Both Synthea patients and OMOP persons are present.
    Loaded,
    SyntheaOnly,
    NoData,
}

/// Whole minutes and whole remaining seconds.
pub fn format_duration(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = (seconds % 60.0).floor() as u64;
    format!("{}m {}s", minutes, rest)
}

/// A fraction as a percentage with one decimal, e.g. `0.925` -> `"92.5%"`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
