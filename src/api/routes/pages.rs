//! HTML dashboard pages.

use axum::{
    Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{DashboardMetrics, DataSnapshot};
use crate::render::{
    DashboardPage, PageContext, comparison_page, concepts_page, executive_summary_page,
    mapping_page, not_found_page,
};
use crate::services::{
    ComparisonService, ConceptService, MappingService, MetricsService, SummaryService,
};

/// Create the router serving the four dashboard pages
pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route(DashboardPage::ExecutiveSummary.path(), get(executive_summary))
        .route(DashboardPage::DetailedComparison.path(), get(detailed_comparison))
        .route(DashboardPage::ConceptMapping.path(), get(concept_mapping))
        .route(DashboardPage::MappingAnalysis.path(), get(mapping_analysis))
}

fn render_with<F>(
    state: &AppState,
    page: DashboardPage,
    metrics: &DashboardMetrics,
    body: F,
) -> Html<String>
where
    F: FnOnce(&PageContext<'_>) -> String,
{
    let logo_url = state.logo_url();
    let ctx = PageContext {
        page,
        metrics,
        region: &state.config.region,
        specialty: &state.config.specialty,
        logo_url: logo_url.as_deref(),
    };
    Html(body(&ctx))
}

async fn executive_summary(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (snapshot, metrics) = state.current().await?;
    let summary = SummaryService::build(&snapshot, &metrics, &state.config.specialty);
    Ok(render_with(
        &state,
        DashboardPage::ExecutiveSummary,
        &metrics,
        |ctx| executive_summary_page(ctx, &summary),
    ))
}

async fn detailed_comparison(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (snapshot, metrics) = state.current().await?;
    let report = ComparisonService::build(&snapshot);
    Ok(render_with(
        &state,
        DashboardPage::DetailedComparison,
        &metrics,
        |ctx| comparison_page(ctx, &report),
    ))
}

async fn concept_mapping(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (_, metrics) = state.current().await?;
    let report = ConceptService::build(&metrics);
    Ok(render_with(
        &state,
        DashboardPage::ConceptMapping,
        &metrics,
        |ctx| concepts_page(ctx, &report),
    ))
}

async fn mapping_analysis(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (snapshot, metrics) = state.current().await?;
    let analysis = MappingService::build(&snapshot);
    Ok(render_with(
        &state,
        DashboardPage::MappingAnalysis,
        &metrics,
        |ctx| mapping_page(ctx, &analysis),
    ))
}

/// Fallback for unknown paths: JSON under `/api`, an HTML page elsewhere.
pub async fn not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiError::not_found(format!("No route for {}", path)).into_response();
    }

    // An unreadable data directory still gets a 404 here, not a 503.
    let metrics = match state.current().await {
        Ok((_, metrics)) => metrics,
        Err(_) => MetricsService::calculate(&DataSnapshot::empty()),
    };
    let page = render_with(&state, DashboardPage::ExecutiveSummary, &metrics, |ctx| {
        not_found_page(ctx, path)
    });
    (StatusCode::NOT_FOUND, page).into_response()
}
