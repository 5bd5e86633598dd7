//! Services module - snapshot caching and the dashboard computations.

pub mod catalog;
pub mod comparison_service;
pub mod concept_service;
pub mod mapping_service;
pub mod metrics_service;
pub mod snapshot_service;
pub mod summary_service;

// Re-export for convenience
pub use comparison_service::ComparisonService;
pub use concept_service::ConceptService;
pub use mapping_service::MappingService;
pub use metrics_service::MetricsService;
pub use snapshot_service::SnapshotService;
pub use summary_service::SummaryService;
