//! POST /api/v1/check-scam and POST /api/v1/verify-authenticity: single
//! image upload in multipart field `file`.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use content_check::{CheckError, ClassificationResult};
use tracing::info;

use crate::{
    core::{app_state::SharedState, upload::Upload},
    error_handler::AppResult,
};

const MISSING_FILE_MSG: &str = "Missing file upload in field `file`.";

/// Handler: POST /api/v1/check-scam
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/v1/check-scam \
///   -F 'file=@listing.jpg;type=image/jpeg'
/// ```
pub async fn check_scam(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let image = Upload::read(multipart?)
        .await?
        .file
        .ok_or_else(|| CheckError::invalid_input(MISSING_FILE_MSG))?;

    info!(mime_type = %image.mime_type, size = image.bytes.len(), "check-scam request");
    Ok(Json(state.checker.classify_scam(image).await?))
}

/// Handler: POST /api/v1/verify-authenticity
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/v1/verify-authenticity \
///   -F 'file=@sneaker.png;type=image/png'
/// ```
pub async fn verify_authenticity(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let image = Upload::read(multipart?)
        .await?
        .file
        .ok_or_else(|| CheckError::invalid_input(MISSING_FILE_MSG))?;

    info!(mime_type = %image.mime_type, size = image.bytes.len(), "verify-authenticity request");
    Ok(Json(state.checker.verify_authenticity(image).await?))
}
