//! Integration tests for the HTML dashboard pages and static assets.

use axum::http::StatusCode;
use axum_test::TestServer;
use omop_dashboard::config::DashboardConfig;
use omop_dashboard::routes::{AppState, create_app};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Data and assets directories for a small run of three patients.
fn setup() -> (TempDir, DashboardConfig) {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    write(
        &data.join("synthea/patients.csv"),
        "Id,BIRTHDATE\np1,1980-01-01\np2,1990-02-02\np3,2000-03-03\n",
    );
    write(&data.join("synthea/allergies.csv"), "PATIENT,CODE\np1,419199007\n");
    write(&data.join("omop/person.csv"), "person_id\n1\n2\n3\n");
    write(
        &data.join("pipeline_report_20240301_100000.json"),
        r#"{"phase_performance": {"extract": {"duration_seconds": 42}}}"#,
    );

    let assets = dir.path().join("assets");
    write(&assets.join("logo.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>");

    let config = DashboardConfig {
        data_dir: data,
        assets_dir: assets,
        region: "Galicia".to_string(),
        specialty: "Gastroenterology".to_string(),
        ..DashboardConfig::default()
    };
    (dir, config)
}

fn create_test_server(config: DashboardConfig) -> TestServer {
    TestServer::new(create_app(AppState::new(config))).unwrap()
}

#[tokio::test]
async fn test_executive_summary_page() {
    let (_dir, config) = setup();
    let server = create_test_server(config);

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Real data: 3 patients transformed"));
    assert!(html.contains("Real data loaded"));
    assert!(html.contains("0m 42s"));
    assert!(html.contains(r#"<img src="/assets/logo.svg""#));
}

#[tokio::test]
async fn test_all_pages_render() {
    let (_dir, config) = setup();
    let server = create_test_server(config);

    for (path, marker) in [
        ("/comparison", "Detailed comparison Synthea → OMOP"),
        ("/concepts", "OMOP concept mapping"),
        ("/mapping", "Unmapped records by table"),
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", path);
        let html = response.text();
        assert!(html.contains(marker), "{} missing {:?}", path, marker);
        assert!(html.contains(&format!(r#"<a href="{}" class="active">"#, path)));
    }
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let (_dir, config) = setup();
    let server = create_test_server(config);

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_api_lookalike_path_is_html_404() {
    let (_dir, config) = setup();
    let server = create_test_server(config);

    let response = server.get("/apiary").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains("<code>/apiary</code>"));

    let response = server.get("/api").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(!response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_unknown_page_with_broken_data_dir_is_404() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::write(&data, "not a directory").unwrap();
    let config = DashboardConfig {
        data_dir: data,
        assets_dir: dir.path().join("assets"),
        ..DashboardConfig::default()
    };
    let server = create_test_server(config);

    let response = server.get("/no-such-page").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains("No data found"));

    assert_eq!(
        server.get("/").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn test_assets_are_served() {
    let (_dir, config) = setup();
    let server = create_test_server(config);

    let response = server.get("/assets/logo.svg").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<svg"));
}

#[tokio::test]
async fn test_text_logo_without_assets() {
    let (dir, mut config) = setup();
    config.assets_dir = dir.path().join("missing");
    let server = create_test_server(config);

    let html = server.get("/").await.text();
    assert!(html.contains("<h2>IDARA</h2>"));
    assert!(!html.contains("<img"));
}

#[tokio::test]
async fn test_empty_data_directory() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig {
        data_dir: dir.path().join("empty"),
        assets_dir: dir.path().join("assets"),
        ..DashboardConfig::default()
    };
    let server = create_test_server(config);

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("No data found"));
}
