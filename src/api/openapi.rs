//! OpenAPI specification definition.
//!
//! Aggregates the JSON route handlers and view schemas.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::dashboard::health_check,
        crate::routes::dashboard::get_snapshot,
        crate::routes::dashboard::get_metrics,
        crate::routes::dashboard::get_summary,
        crate::routes::dashboard::get_comparison,
        crate::routes::dashboard::get_concepts,
        crate::routes::dashboard::get_mapping,
        crate::routes::dashboard::reload_snapshot,
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::SyntheaTable,
        crate::models::OmopTable,
        crate::models::DataStatus,
        crate::models::DashboardMetrics,
        crate::models::Tone,
        crate::models::SummaryCard,
        crate::models::CountLine,
        crate::models::Bottleneck,
        crate::models::KeyAnswer,
        crate::models::ExecutiveSummary,
        crate::models::Integrity,
        crate::models::ComparisonRow,
        crate::models::ChartSeries,
        crate::models::ComparisonReport,
        crate::models::CoverageStatus,
        crate::models::ConceptCategory,
        crate::models::ConceptReport,
        crate::models::MappingGap,
        crate::models::Priority,
        crate::models::MissingConcept,
        crate::models::UnmappedRecord,
        crate::models::UnmappedTableReport,
        crate::models::Guidance,
        crate::models::ImprovementPlan,
        crate::models::MappingAnalysis,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Dashboard", description = "Synthea to OMOP transformation results"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "OMOP Transformation Dashboard",
        description = "Row counts, quality metrics and concept coverage of a Synthea to OMOP CDM run",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8501/api/v1", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
