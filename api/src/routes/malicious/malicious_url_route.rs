//! POST /api/v1/check-url-malicious-intent: form field `url`, sent either
//! url-encoded or as multipart.

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
};
use content_check::ClassificationResult;
use tracing::info;

use crate::{
    core::{app_state::SharedState, upload::Upload},
    error_handler::AppResult,
    routes::malicious::url_request::UrlForm,
};

/// Handler: POST /api/v1/check-url-malicious-intent
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/v1/check-url-malicious-intent \
///   -d 'url=https://paypa1-login.example/verify'
/// ```
pub async fn check_url_malicious_intent(
    State(state): State<SharedState>,
    req: Request,
) -> AppResult<Json<ClassificationResult>> {
    let url = if is_multipart(&req) {
        let multipart = Multipart::from_request(req, &state).await?;
        Upload::read(multipart).await?.url.unwrap_or_default()
    } else {
        let Form(form) = Form::<UrlForm>::from_request(req, &state).await?;
        form.url
    };

    info!(%url, "check-url-malicious-intent request");
    Ok(Json(state.checker.classify_url(&url).await?))
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}
