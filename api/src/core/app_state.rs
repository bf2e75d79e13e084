use std::sync::Arc;

use ai_llm_service::{
    GeminiService, GenerativeModel, HealthService, config::llm_model_config::LlmModelConfig,
    config_gemini,
};
use content_check::ContentChecker;
use services::web_page::PageFetcher;

use crate::error_handler::AppError;

/// Timeout for the `/health` probe, seconds.
const HEALTH_TIMEOUT_SECS: u64 = 10;

/// Shared, read-only state for all HTTP handlers.
pub struct AppState {
    /// Runs the four classification checks.
    pub checker: ContentChecker,
    /// Probes the model backend for `/health`.
    pub health: HealthService,
    /// Configuration of the model behind `checker`.
    pub model_config: LlmModelConfig,
}

impl AppState {
    /// Builds state from environment variables; fails fast on missing or
    /// invalid configuration (e.g. no `GEMINI_API_KEY`).
    pub fn from_env() -> Result<Self, AppError> {
        let model_config = config_gemini()?;
        let model = Arc::new(GeminiService::new(model_config.clone())?);
        Self::with_model(model, model_config)
    }

    /// Builds state around an already constructed model.
    pub fn with_model(
        model: Arc<dyn GenerativeModel>,
        model_config: LlmModelConfig,
    ) -> Result<Self, AppError> {
        let fetcher = PageFetcher::new().map_err(AppError::HttpClient)?;

        Ok(Self {
            checker: ContentChecker::new(model, fetcher),
            health: HealthService::new(Some(HEALTH_TIMEOUT_SECS))?,
            model_config,
        })
    }
}

pub type SharedState = Arc<AppState>;
