use serde::Serialize;
use utoipa::ToSchema;

/// Colour a card or notice is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Good,
    Warning,
    Critical,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CountLine {
    pub table: String,
    pub label: String,
    pub count: u64,
}

/// The known bottleneck of the current vocabulary set.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Bottleneck {
    pub area: String,
    pub mapped_rate: f64,
    pub unmapped_rate: f64,
    pub cause: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct KeyAnswer {
    pub question: String,
    /// True when the answer is the one the coordinators want to hear.
    pub passed: bool,
    pub headline: String,
    pub detail: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExecutiveSummary {
    pub cards: Vec<SummaryCard>,
    pub bottleneck: Bottleneck,
    pub inputs: Vec<CountLine>,
    pub synthea_total: u64,
    pub outputs: Vec<CountLine>,
    pub omop_total: u64,
    pub answers: Vec<KeyAnswer>,
}
