use anyhow::Context;
use tracing::{error, info};

use omop_dashboard::config::DashboardConfig;
use omop_dashboard::middleware::init_tracing;
use omop_dashboard::routes::{create_app, create_app_state};

// Panic hook to log panics through tracing before the default output
fn setup_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("Panic at {}: {}", location, panic_info);
        default_hook(panic_info);
    }));
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    setup_panic_hook();

    let config = DashboardConfig::from_env().context("Invalid dashboard configuration")?;
    let addr = config.socket_addr();
    info!(
        "Dashboard starting: data_dir={:?}, region={}, specialty={}",
        config.data_dir, config.region, config.specialty
    );
    match config.cache_ttl {
        Some(ttl) => info!("Snapshot cache TTL: {}s", ttl.as_secs()),
        None => info!("Snapshot cache kept until POST /api/v1/reload"),
    }

    let app_state = create_app_state(config);

    // Load once up front so configuration problems show in the startup log
    if let Err(e) = app_state.snapshots.current().await {
        error!("Initial snapshot load failed: {}", e);
    }

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;
    info!("Dashboard available at http://{}", addr);
    info!("API health check available at http://{}/api/v1/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

// Handle both SIGINT (Ctrl+C) and SIGTERM (Docker stop)
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("SIGINT received, shutting down gracefully");
            }
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("SIGINT received, shutting down gracefully");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down gracefully");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for CTRL+C: {}", e);
    }
    info!("Shutdown signal received");
}
