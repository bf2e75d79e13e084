//! GET /health: probes the configured model backend.

use axum::{Json, extract::State, http::StatusCode};

use ai_llm_service::HealthStatus;

use crate::core::app_state::SharedState;

/// Handler: GET /health
///
/// Returns `200` with the probe result when the backend is healthy, `503`
/// with the same body otherwise.
pub async fn health(State(state): State<SharedState>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.health.check(&state.model_config).await;
    let code = if status.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
