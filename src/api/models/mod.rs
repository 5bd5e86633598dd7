// Models module - table catalogue, snapshot, metrics and dashboard views

pub mod comparison;
pub mod concepts;
pub mod mapping;
pub mod metrics;
pub mod pipeline_report;
pub mod snapshot;
pub mod summary;
pub mod tables;

pub use comparison::{ChartSeries, ComparisonReport, ComparisonRow, Integrity};
pub use concepts::{ConceptCategory, ConceptReport, CoverageStatus};
pub use mapping::{
    Guidance, ImprovementPlan, MappingAnalysis, MappingGap, MissingConcept, Priority,
    UnmappedRecord, UnmappedTableReport,
};
pub use metrics::{DashboardMetrics, DataStatus, format_duration, format_percent};
pub use pipeline_report::PipelineReport;
pub use snapshot::DataSnapshot;
pub use summary::{Bottleneck, CountLine, ExecutiveSummary, KeyAnswer, SummaryCard, Tone};
pub use tables::{OmopTable, SyntheaTable, TableCounts};
