//! Integration tests for the JSON API.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use omop_dashboard::config::DashboardConfig;
use omop_dashboard::models::{DataSnapshot, OmopTable, PipelineReport, SyntheaTable, TableCounts};
use omop_dashboard::routes::{AppState, create_api_router, create_app};
use omop_dashboard::storage::StaticDataSource;
use serde_json::{Value, json};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn sample_snapshot() -> DataSnapshot {
    let synthea: TableCounts<SyntheaTable> = [
        (SyntheaTable::Patients, 30),
        (SyntheaTable::Encounters, 200),
        (SyntheaTable::Conditions, 54),
    ]
    .into_iter()
    .collect();
    let omop: TableCounts<OmopTable> = [
        (OmopTable::Person, 30),
        (OmopTable::VisitOccurrence, 200),
        (OmopTable::ConditionOccurrence, 54),
    ]
    .into_iter()
    .collect();
    let report = PipelineReport::new(
        "pipeline_report_20240301.json",
        json!({
            "validation_results": {"summary": {"overall_success_rate": 0.98}},
            "phase_performance": {"extract": {"duration_seconds": 65.0}}
        }),
    );
    DataSnapshot::new(synthea, omop, report)
}

fn test_config() -> DashboardConfig {
    DashboardConfig {
        assets_dir: "does-not-exist".into(),
        ..DashboardConfig::default()
    }
}

fn create_test_server() -> TestServer {
    create_test_server_with(test_config())
}

fn create_test_server_with(config: DashboardConfig) -> TestServer {
    let state = AppState::with_source(
        config,
        Arc::new(StaticDataSource::new(sample_snapshot())),
    );
    TestServer::new(create_app(state)).unwrap()
}

const ALLOWED_ORIGIN: &str = "http://allowed.example";
const FOREIGN_ORIGIN: &str = "http://foreign.example";

fn restricted_cors_server() -> TestServer {
    create_test_server_with(DashboardConfig {
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        ..test_config()
    })
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = create_test_server();

    for path in ["/health", "/api/v1/health"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "omop-dashboard");
    }
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total_patients"], 30);
    assert_eq!(body["omop_persons"], 30);
    assert_eq!(body["success_rate"], 0.98);
    assert_eq!(body["processing_time"], 65.0);
    assert_eq!(body["status"], "loaded");
    assert_eq!(body["db_connected"], true);
}

#[tokio::test]
async fn test_snapshot_endpoint() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/snapshot").await.json();
    assert_eq!(body["synthea"]["patients"], 30);
    assert_eq!(body["omop"]["visit_occurrence"], 200);
    assert_eq!(
        body["pipeline_report"]["source_file"],
        "pipeline_report_20240301.json"
    );
    assert!(body["loaded_at"].is_string());
}

#[tokio::test]
async fn test_summary_endpoint() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/summary").await.json();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[1]["value"], "98.0%");
    assert_eq!(cards[2]["value"], "1m 5s");
    assert_eq!(body["answers"].as_array().unwrap().len(), 3);
    assert_eq!(body["synthea_total"], 284);
}

#[tokio::test]
async fn test_comparison_endpoint() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/comparison").await.json();
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["integrity"], "complete");
    assert_eq!(rows[9]["target_count"], Value::Null);
    assert_eq!(body["chart"]["labels"].as_array().unwrap().len(), 5);
    assert_eq!(body["efficiency"], 100.0);
}

#[tokio::test]
async fn test_concepts_endpoint() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/concepts").await.json();
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["categories"][0]["status"], "excellent");
}

#[tokio::test]
async fn test_mapping_endpoint() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/mapping").await.json();
    let tables = body["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 4);
    assert_eq!(tables[0]["omop_table"], "condition_occurrence");
    assert_eq!(tables[0]["source_total"], 54);
    assert_eq!(tables[0]["records"][0]["gap"], "missing_snomed");
    assert_eq!(tables[0]["records"][0]["priority"], "high");
}

#[tokio::test]
async fn test_reload_endpoint() {
    let dir = TempDir::new().unwrap();
    let synthea = dir.path().join("synthea");
    fs::create_dir_all(&synthea).unwrap();
    fs::write(synthea.join("patients.csv"), "Id\np1\n").unwrap();

    let config = DashboardConfig {
        data_dir: dir.path().to_path_buf(),
        ..test_config()
    };
    let server = TestServer::new(create_app(AppState::new(config))).unwrap();

    let body: Value = server.get("/api/v1/metrics").await.json();
    assert_eq!(body["total_patients"], 1);
    assert_eq!(body["status"], "synthea_only");

    fs::write(synthea.join("patients.csv"), "Id\np1\np2\n").unwrap();

    let response = server.post("/api/v1/reload").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total_patients"], 2);

    let body: Value = server.get("/api/v1/metrics").await.json();
    assert_eq!(body["total_patients"], 2);
}

#[tokio::test]
async fn test_load_failure_is_service_unavailable() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");
    fs::write(&root, "not a directory").unwrap();

    let config = DashboardConfig {
        data_dir: root,
        ..test_config()
    };
    let server = TestServer::new(create_app(AppState::new(config))).unwrap();

    let response = server.get("/api/v1/metrics").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], 503);
    assert!(body["error"].as_str().unwrap().contains("not a directory"));
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let server = create_test_server();

    let response = server.get("/api/v1/does-not-exist").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_openapi_document() {
    let server = create_test_server();

    let body: Value = server.get("/api/v1/openapi.json").await.json();
    assert!(body["paths"].get("/metrics").is_some());
    assert!(body["paths"].get("/reload").is_some());
    assert!(body["components"]["schemas"].get("DashboardMetrics").is_some());
}

#[tokio::test]
async fn test_api_router_alone() {
    let state = AppState::with_source(
        test_config(),
        Arc::new(StaticDataSource::new(DataSnapshot::empty())),
    );
    let server = TestServer::new(create_api_router().with_state(state)).unwrap();

    let body: Value = server.get("/metrics").await.json();
    assert_eq!(body["status"], "no_data");
    assert_eq!(body["success_rate"], 0.95);
}

#[tokio::test]
async fn test_cors_any_origin_may_get() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/metrics")
        .add_header(ORIGIN, HeaderValue::from_static(FOREIGN_ORIGIN))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let response = server
        .method(Method::OPTIONS, "/api/v1/reload")
        .add_header(ORIGIN, HeaderValue::from_static(FOREIGN_ORIGIN))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;
    let methods = response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"));
    assert!(!methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let server = restricted_cors_server();

    let response = server
        .get("/api/v1/metrics")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED_ORIGIN
    );

    let response = server
        .get("/api/v1/metrics")
        .add_header(ORIGIN, HeaderValue::from_static(FOREIGN_ORIGIN))
        .await;
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_cors_restricted_preflight_allows_post() {
    let server = restricted_cors_server();

    let response = server
        .method(Method::OPTIONS, "/api/v1/reload")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED_ORIGIN
    );
    let methods = response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));

    let response = server
        .method(Method::OPTIONS, "/api/v1/reload")
        .add_header(ORIGIN, HeaderValue::from_static(FOREIGN_ORIGIN))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
