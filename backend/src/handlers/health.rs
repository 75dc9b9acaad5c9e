use axum::{http::StatusCode, Json};
use shared::HealthResponse;
use tracing::debug;

/// Liveness probe.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    debug!("[HEALTH] Probe");
    (StatusCode::OK, Json(HealthResponse::ok()))
}
