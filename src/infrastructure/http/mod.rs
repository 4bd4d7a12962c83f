//! HTTP surface: an axum router over the service facade. Success responses
//! use a `{"success": true, ...}` envelope; failures render as
//! `{"error": "..."}` with a 4xx/5xx status (see error.rs).

pub mod error;
pub mod routes;

use crate::GpuIntel;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub fn router(app: Arc<GpuIntel>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/ai/chat", post(routes::chat))
        .route("/api/ai/scenario", post(routes::scenario))
        .route("/api/ai/knowledge", get(routes::knowledge))
        .route("/api/ai/gpu-comparison", get(routes::gpu_comparison))
        .route("/api/market/connect", post(routes::market_connect))
        .route("/api/market/disconnect", post(routes::market_disconnect))
        .route("/api/market/status", get(routes::market_status))
        .route("/api/market/reference-data", post(routes::reference_data))
        .route("/api/market/historical-data", post(routes::historical_data))
        .route("/api/market/gpu-market", get(routes::gpu_market))
        .route("/api/market/datacenter-reits", get(routes::datacenter_reits))
        .route("/api/training/modules", get(routes::list_modules))
        .route("/api/training/modules/:module_id", get(routes::get_module))
        .route(
            "/api/training/modules/:module_id/lessons/:lesson_id",
            get(routes::get_lesson),
        )
        .route(
            "/api/training/modules/:module_id/lessons/:lesson_id/quiz",
            post(routes::submit_quiz),
        )
        .route("/api/training/progress", get(routes::get_progress))
        .route("/api/dashboard/overview", get(routes::dashboard_overview))
        .route("/api/dashboard/tco-calculator", post(routes::tco_calculator))
        .route("/api/dashboard/roi-calculator", post(routes::roi_calculator))
        .layer(cors)
        .with_state(app)
}

pub async fn start_server(app: Arc<GpuIntel>, port: u16) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received SIGTERM, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
