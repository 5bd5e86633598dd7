//! JSON endpoints for the dashboard views.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::info;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{
    ComparisonReport, ConceptReport, DashboardMetrics, DataSnapshot, ExecutiveSummary,
    MappingAnalysis,
};
use crate::services::{
    ComparisonService, ConceptService, MappingService, MetricsService, SummaryService,
};

/// Create the dashboard data router
pub fn dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/snapshot", get(get_snapshot))
        .route("/metrics", get(get_metrics))
        .route("/summary", get(get_summary))
        .route("/comparison", get(get_comparison))
        .route("/concepts", get(get_concepts))
        .route("/mapping", get(get_mapping))
        .route("/reload", post(reload_snapshot))
}

/// GET /health - Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Service is up", body = Object)
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "omop-dashboard",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /snapshot - Raw row counts and pipeline report
#[utoipa::path(
    get,
    path = "/snapshot",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Current snapshot", body = Object),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_snapshot(State(state): State<AppState>) -> Result<Json<DataSnapshot>, ApiError> {
    let snapshot = state.snapshots.current().await?;
    Ok(Json(DataSnapshot::clone(&snapshot)))
}

/// GET /metrics - Headline metrics
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardMetrics),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_metrics(
    State(state): State<AppState>,
) -> Result<Json<DashboardMetrics>, ApiError> {
    let (_, metrics) = state.current().await?;
    Ok(Json(metrics))
}

/// GET /summary - Executive summary
#[utoipa::path(
    get,
    path = "/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Executive summary", body = ExecutiveSummary),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<ExecutiveSummary>, ApiError> {
    let (snapshot, metrics) = state.current().await?;
    Ok(Json(SummaryService::build(
        &snapshot,
        &metrics,
        &state.config.specialty,
    )))
}

/// GET /comparison - Synthea vs OMOP row counts
#[utoipa::path(
    get,
    path = "/comparison",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Table comparison", body = ComparisonReport),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_comparison(
    State(state): State<AppState>,
) -> Result<Json<ComparisonReport>, ApiError> {
    let snapshot = state.snapshots.current().await?;
    Ok(Json(ComparisonService::build(&snapshot)))
}

/// GET /concepts - Concept mapping coverage
#[utoipa::path(
    get,
    path = "/concepts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Concept coverage", body = ConceptReport),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_concepts(
    State(state): State<AppState>,
) -> Result<Json<ConceptReport>, ApiError> {
    let (_, metrics) = state.current().await?;
    Ok(Json(ConceptService::build(&metrics)))
}

/// GET /mapping - Unmapped records per table
#[utoipa::path(
    get,
    path = "/mapping",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Mapping analysis", body = MappingAnalysis),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn get_mapping(
    State(state): State<AppState>,
) -> Result<Json<MappingAnalysis>, ApiError> {
    let snapshot = state.snapshots.current().await?;
    Ok(Json(MappingService::build(&snapshot)))
}

/// POST /reload - Reload the data directory
#[utoipa::path(
    post,
    path = "/reload",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Metrics of the reloaded snapshot", body = DashboardMetrics),
        (status = 503, description = "Data directory could not be loaded")
    )
)]
pub async fn reload_snapshot(
    State(state): State<AppState>,
) -> Result<Json<DashboardMetrics>, ApiError> {
    let snapshot = state.snapshots.reload().await?;
    let metrics = MetricsService::calculate(&snapshot);
    info!(
        "Snapshot reloaded: {} patients, {} persons",
        metrics.total_patients, metrics.omop_persons
    );
    Ok(Json(metrics))
}
