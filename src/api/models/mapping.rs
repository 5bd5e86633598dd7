use super::tables::{OmopTable, SyntheaTable};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MappingGap {
    MissingSnomed,
    MissingRxNorm,
    MissingAtcAndRxNorm,
    MissingLoinc,
}

impl MappingGap {
    pub fn label(self) -> &'static str {
        match self {
            MappingGap::MissingSnomed => "No SNOMED",
            MappingGap::MissingRxNorm => "No RxNorm",
            MappingGap::MissingAtcAndRxNorm => "No ATC or RxNorm",
            MappingGap::MissingLoinc => "No LOINC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

/// A source code with no standard concept yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MissingConcept {
    /// ICD-10, ATC or CPT code; absent for free-text measurements.
    pub code: Option<String>,
    pub description: String,
    pub gap: MappingGap,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UnmappedRecord {
    pub id: String,
    pub code: Option<String>,
    pub description: String,
    /// Measured value, for measurements only.
    pub value: Option<String>,
    pub patient: String,
    pub date: String,
    pub gap: MappingGap,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UnmappedTableReport {
    pub omop_table: OmopTable,
    pub source_table: SyntheaTable,
    pub mapping_rate: f64,
    pub source_total: u64,
    pub mapped: u64,
    pub unmapped: u64,
    pub unmapped_percent: f64,
    pub records: Vec<UnmappedRecord>,
}

/// Titled list of recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Guidance {
    pub title: String,
    pub items: Vec<String>,
}

/// Current against target coverage, in percent, one entry per category.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ImprovementPlan {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub target: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MappingAnalysis {
    pub gastro_rate: f64,
    pub drug_rate: f64,
    pub missing_conditions: Vec<MissingConcept>,
    pub missing_drugs: Vec<MissingConcept>,
    pub tables: Vec<UnmappedTableReport>,
    pub actions: Vec<Guidance>,
    /// Vocabulary and mapping tools, one column each.
    pub tools: Vec<Guidance>,
    pub improvement_plan: ImprovementPlan,
    /// Manual USAGI workflow against the automated framework.
    pub framework_comparison: Vec<Guidance>,
    pub conclusion: String,
    pub next_steps: Vec<Guidance>,
}
