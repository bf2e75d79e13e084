use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::app_state::{AppState, SharedState},
    error_handler::AppError,
    routes::{
        health_route::health,
        image_check::image_check_route::{check_scam, verify_authenticity},
        malicious::{
            malicious_text_route::check_malicious_text,
            malicious_url_route::check_url_malicious_intent,
        },
        root_route::read_root,
    },
};

/// Listen address when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Upload cap; matches the inline-data limit of the model API.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Builds the application router over already constructed state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health))
        .route("/api/v1/check-scam", post(check_scam))
        .route("/api/v1/verify-authenticity", post(verify_authenticity))
        .route("/api/v1/check-malicious-text", post(check_malicious_text))
        .route(
            "/api/v1/check-url-malicious-intent",
            post(check_url_malicious_intent),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Loads configuration, binds `API_ADDRESS` and serves until Ctrl+C.
///
/// # Errors
/// Configuration problems (e.g. missing `GEMINI_API_KEY`) are reported before
/// the listener is bound.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    let host_url = env::var("API_ADDRESS")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(|source| AppError::Bind {
            addr: host_url.clone(),
            source,
        })?;

    info!(address = %host_url, "ScamOrNot API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ai_llm_service::{
        AiLlmError, GenerateRequest, GenerativeModel,
        config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
        error_handler::{ProviderError, ProviderErrorKind},
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    const BOUNDARY: &str = "scam-or-not-test-boundary";

    struct FakeModel {
        reply: Option<&'static str>,
        calls: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl GenerativeModel for FakeModel {
        async fn generate(&self, request: GenerateRequest) -> Result<String, AiLlmError> {
            self.calls.lock().unwrap().push(request);
            match self.reply {
                Some(r) => Ok(r.to_string()),
                None => Err(ProviderError::new(
                    LlmProvider::Gemini,
                    ProviderErrorKind::Decode("boom".into()),
                )
                .into()),
            }
        }

        fn describe(&self) -> String {
            "fake".into()
        }
    }

    fn model_config() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Gemini,
            model: "gemini-1.5-flash".into(),
            endpoint: "http://127.0.0.1:1".into(),
            api_key: Some("test".into()),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(1),
        }
    }

    fn app(reply: Option<&'static str>) -> (Router, Arc<FakeModel>) {
        let model = Arc::new(FakeModel {
            reply,
            calls: Mutex::new(Vec::new()),
        });
        let state = AppState::with_model(model.clone(), model_config()).unwrap();
        (router(Arc::new(state)), model)
    }

    /// Parts are `(name, Some(content_type) for files, body)`.
    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, content_type, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match content_type {
                Some(ct) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"upload\"\r\n\
                         Content-Type: {ct}\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        multipart_body_request(uri, body)
    }

    fn multipart_body_request(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn form_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let (app, _) = app(None);
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().starts_with("Welcome to the ScamOrNot API!"));
    }

    #[tokio::test]
    async fn check_scam_returns_decoded_result() {
        let (app, model) = app(Some(
            "Assessment: Scam\nReasoning: Price too low\nConfidenceScore: 87",
        ));
        let req = multipart_request(
            "/api/v1/check-scam",
            &[("file", Some("image/jpeg"), &b"\xff\xd8\xff"[..])],
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Assessment"], "Scam");
        assert_eq!(body["Reasoning"], "Price too low");
        assert_eq!(body["ConfidenceScore"], 87);

        let calls = model.calls.lock().unwrap();
        let image = calls[0].image.as_ref().unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(&image.bytes[..], b"\xff\xd8\xff");
    }

    #[tokio::test]
    async fn verify_authenticity_rejects_non_image() {
        let (app, model) = app(Some("unused"));
        let req = multipart_request(
            "/api/v1/verify-authenticity",
            &[("file", Some("text/plain"), &b"hello"[..])],
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid file type. Please upload an image.");
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn check_scam_without_file_field_is_bad_request() {
        let (app, _) = app(Some("unused"));
        let req = multipart_request("/api/v1/check-scam", &[("other", None, &b"x"[..])]);
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn check_scam_with_non_multipart_body_is_bad_request() {
        let (app, _) = app(Some("unused"));
        let (status, body) = send(app, form_request("/api/v1/check-scam", "file=x")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn malicious_text_without_text_or_file_is_invalid_input() {
        let (app, _) = app(Some("unused"));
        let req = multipart_request("/api/v1/check-malicious-text", &[]);
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn malicious_text_with_text_only() {
        let (app, model) = app(Some("Assessment: Not Malicious"));
        let req = multipart_request(
            "/api/v1/check-malicious-text",
            &[("text", None, &b"See you at lunch tomorrow"[..])],
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Assessment"], "Not Malicious");
        assert_eq!(body["Reasoning"], "N/A");
        assert_eq!(body["ConfidenceScore"], 0);
        assert!(model.calls.lock().unwrap()[0].prompt.contains("See you at lunch tomorrow"));
    }

    #[tokio::test]
    async fn malicious_text_ignores_empty_file_input() {
        let (app, model) = app(Some("Assessment: Not Malicious"));
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"text\"\r\n\r\n\
             hello there\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             \r\n\
             --{BOUNDARY}--\r\n"
        );
        let req = multipart_body_request("/api/v1/check-malicious-text", body.into_bytes());
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Assessment"], "Not Malicious");

        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].image.is_none());
        assert!(calls[0].prompt.contains("hello there"));
    }

    #[tokio::test]
    async fn url_check_against_unreachable_host_is_upstream_fetch_error() {
        let (app, model) = app(Some("unused"));
        let req = form_request(
            "/api/v1/check-url-malicious-intent",
            "url=http%3A%2F%2F127.0.0.1%3A1%2F",
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UPSTREAM_FETCH_ERROR");
        assert!(body["detail"].as_str().unwrap().contains("127.0.0.1:1"));
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn url_check_accepts_multipart_too() {
        let (app, _) = app(Some("unused"));
        let req = multipart_request(
            "/api/v1/check-url-malicious-intent",
            &[("url", None, &b"http://127.0.0.1:1/"[..])],
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UPSTREAM_FETCH_ERROR");
    }

    #[tokio::test]
    async fn url_check_without_url_is_invalid_input() {
        let (app, _) = app(Some("unused"));
        let (status, body) = send(app, form_request("/api/v1/check-url-malicious-intent", "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn model_failure_maps_to_internal_error() {
        let (app, _) = app(None);
        let req = multipart_request(
            "/api/v1/check-scam",
            &[("file", Some("image/png"), &b"\x89PNG"[..])],
        );
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "MODEL_INVOCATION_ERROR");
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Error generating content from Gemini:")
        );
    }

    #[tokio::test]
    async fn health_reports_unreachable_backend() {
        let (app, _) = app(None);
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["ok"], false);
        assert_eq!(body["provider"], "Gemini");
    }
}
