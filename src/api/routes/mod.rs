//! API routes module - organizes all route handlers.
//!
//! JSON views live under `/api/v1`, HTML pages at the root.

pub mod app_state;
pub mod dashboard;
pub mod error;
pub mod openapi;
pub mod pages;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::middleware::{create_cors_layer, create_restricted_cors_layer, create_trace_layer};

pub use app_state::AppState;
pub use error::ApiError;

/// Create the API router combining the JSON route modules
///
/// State is applied by callers (`create_app`, or tests via `with_state`).
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(dashboard::dashboard_router())
        .merge(openapi::openapi_router())
}

/// Create the application state reading from the configured data directory.
pub fn create_app_state(config: DashboardConfig) -> AppState {
    AppState::new(config)
}

/// Build the complete application: health check, JSON API, pages, assets and middleware.
pub fn create_app(app_state: AppState) -> Router {
    let config = app_state.config.clone();

    let mut app = Router::new()
        .route("/health", get(dashboard::health_check))
        .nest("/api/v1", create_api_router())
        .merge(pages::pages_router());

    if config.assets_dir.is_dir() {
        info!("Serving assets from: {:?}", config.assets_dir);
        app = app.nest_service(
            "/assets",
            ServeDir::new(&config.assets_dir).append_index_html_on_directories(false),
        );
    } else {
        warn!(
            "Assets directory not found: {:?}. Logo and static files will not be served.",
            config.assets_dir
        );
    }

    let cors = if config.cors_origins.is_empty() {
        create_cors_layer()
    } else {
        info!("CORS restricted to: {:?}", config.cors_origins);
        create_restricted_cors_layer(&config.cors_origins)
    };

    app.fallback(pages::not_found)
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(create_trace_layer()).layer(cors))
}
