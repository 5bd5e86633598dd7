use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Excellent,
    Review,
}

impl CoverageStatus {
    pub fn label(self) -> &'static str {
        match self {
            CoverageStatus::Excellent => "Excellent",
            CoverageStatus::Review => "Review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ConceptCategory {
    pub category: String,
    pub table: String,
    pub mapped_rate: f64,
    pub status: CoverageStatus,
    pub vocabularies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ConceptReport {
    pub mapped_rate: f64,
    pub unmapped_rate: f64,
    pub categories: Vec<ConceptCategory>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}
