use axum::extract::State;
use axum::{routing::get, Json, Router};
use investo_db::BackendKind;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which data backend is serving requests.
    pub backend: BackendKind,
    /// Per-request timeout enforced by the middleware stack.
    pub request_timeout_secs: u64,
}

/// GET /health -- returns service status, the active backend and request timeout.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend.kind(),
        request_timeout_secs: state.config.request_timeout_secs,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
