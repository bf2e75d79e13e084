use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ai_llm_service::AiLlmError;
use content_check::CheckError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] AiLlmError),

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    /// Malformed request body (bad multipart/form encoding).
    #[error("{0}")]
    BadRequest(String),

    /// Domain failure from the checker.
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Check(e) if e.is_client_error() => StatusCode::BAD_REQUEST,

            // 5xx
            AppError::Check(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) | AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::Bind { .. } | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "INVALID_INPUT",
            AppError::Check(CheckError::InvalidInput(_)) => "INVALID_INPUT",
            AppError::Check(CheckError::UpstreamFetch(_)) => "UPSTREAM_FETCH_ERROR",
            AppError::Check(CheckError::ModelInvocation(_)) => "MODEL_INVOCATION_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: String,
    code: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let detail = self.to_string();

        if status.is_server_error() {
            error!(%status, code, error = ?self, "request failed");
        } else {
            warn!(%status, code, %detail, "request rejected");
        }

        (status, Json(ErrorBody { detail, code })).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<MultipartRejection> for AppError {
    fn from(err: MultipartRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(err: FormRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
