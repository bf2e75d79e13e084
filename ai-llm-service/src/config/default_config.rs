//! Default model config loaded strictly from environment variables.
//!
//! Read once at startup and validated eagerly so a misconfigured process
//! fails before serving traffic.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY`   = API key (mandatory)
//! - `GEMINI_MODEL`     = model id (default [`DEFAULT_GEMINI_MODEL`])
//! - `GEMINI_ENDPOINT`  = API base URL (default [`DEFAULT_GEMINI_ENDPOINT`])
//! - `LLM_MAX_TOKENS`   = optional max output tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (0.0..=2.0)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (default 60)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt_f32, env_opt_u32, env_opt_u64, env_or, must_env,
        validate_http_endpoint, validate_range_f32,
    },
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the Gemini config used for every classification request.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `GEMINI_API_KEY` is absent
/// - [`ConfigError::InvalidFormat`] if `GEMINI_ENDPOINT` is not http(s)
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numerics
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GEMINI_API_KEY")?;

    let model = env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let endpoint = env_or("GEMINI_ENDPOINT", DEFAULT_GEMINI_ENDPOINT);
    validate_http_endpoint("GEMINI_ENDPOINT", endpoint.trim())?;

    let temperature = env_opt_f32("LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", t, 0.0, 2.0)?;
    }

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model: model.trim().to_string(),
        endpoint: endpoint.trim().to_string(),
        api_key: Some(api_key.trim().to_string()),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature,
        top_p: None,
        timeout_secs: Some(env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}
