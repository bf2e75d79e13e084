//! POST /api/v1/check-malicious-text: optional `text` field and/or image
//! `file`, at least one of them.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use content_check::ClassificationResult;
use tracing::info;

use crate::{
    core::{app_state::SharedState, upload::Upload},
    error_handler::AppResult,
};

/// Handler: POST /api/v1/check-malicious-text
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/v1/check-malicious-text \
///   -F 'text=Your parcel is on hold, pay the fee at http://dhl-fees.example' \
///   -F 'file=@sms.png;type=image/png'
/// ```
pub async fn check_malicious_text(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let Upload { file, text, .. } = Upload::read(multipart?).await?;

    info!(
        text_len = text.as_ref().map(String::len).unwrap_or(0),
        has_file = file.is_some(),
        "check-malicious-text request"
    );
    Ok(Json(state.checker.classify_malicious(text, file).await?))
}
