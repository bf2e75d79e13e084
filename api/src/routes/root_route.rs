//! GET /: static welcome message.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the ScamOrNot API! Use /api/v1/check-scam, /api/v1/verify-authenticity, \
                  /api/v1/check-malicious-text or /api/v1/check-url-malicious-intent endpoints.",
    })
}
